use std::{env, fs, process};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: minigo <file>");
            process::exit(2);
        }
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("{}: {}", path, err);
            process::exit(2);
        }
    };

    for lexeme in minigo::tokenize(&content) {
        println!("{:>4}: {:?}", lexeme.line, lexeme.token);
    }

    match minigo::parse(&content) {
        Ok(_program) => println!("Accepted!"),
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }
            println!("Rejected!");
        }
    }
}
