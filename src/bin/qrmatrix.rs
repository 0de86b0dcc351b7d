use clap::Parser;
use qr_matrix::{ECLevel, QRMatrix, build_matrix};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrmatrix", version, about = "Build a QR module matrix from text")]
struct Cli {
    /// Text payload to encode
    text: String,
    /// Error correction level (L, M, Q or H)
    #[arg(long, default_value = "L")]
    ec_level: ECLevel,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match build_matrix(&cli.text, cli.ec_level) {
        Ok(matrix) => {
            print_matrix(&matrix);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("qrmatrix: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn print_matrix(matrix: &QRMatrix) {
    let n = matrix.module_count();
    for row in 0..n {
        let mut line = String::with_capacity(n * 2);
        for col in 0..n {
            line.push_str(if matrix.is_dark(row, col) {
                "\u{2588}\u{2588}"
            } else {
                "  "
            });
        }
        println!("{}", line);
    }
}
