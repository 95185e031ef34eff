use std::env;
use std::process;

use editdistance::{levenshtein_matrix, levenshtein_str};
use log::debug;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let show_matrix = args.iter().any(|a| a == "--matrix");
    let words: Vec<&String> = args.iter().filter(|a| *a != "--matrix").collect();

    let (source, target) = match words.as_slice() {
        [a, b] => (a.as_str(), b.as_str()),
        _ => {
            eprintln!("usage: editdist [--matrix] <source> <target>");
            process::exit(2);
        }
    };

    debug!(
        "computing distance, source len {}, target len {}",
        source.chars().count(),
        target.chars().count()
    );

    if show_matrix {
        let source_chars: Vec<char> = source.chars().collect();
        let target_chars: Vec<char> = target.chars().collect();
        match levenshtein_matrix(&source_chars, &target_chars) {
            Ok(matrix) => {
                print!("{}", matrix);
                println!("{}", matrix.distance());
            }
            Err(e) => {
                eprintln!("editdist: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", levenshtein_str(source, target));
    }
}
