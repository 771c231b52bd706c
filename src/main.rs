use anyhow::Result;
use lexar_scanner::{keywords::KeywordSet, tokens::TokenKind, Lexer};
use rustyline::{error::ReadlineError, Editor};

const MAX_KEYWORDS: usize = 3;
const SENTINEL: &str = "ANALYZE";

fn main() -> Result<()> {
    println!("=== Lexical Analyzer ===");

    let mut rl = Editor::<()>::new()?;

    let words = read_keywords(&mut rl)?;

    println!("\nDefined keywords:");
    for word in &words {
        println!("- {word}");
    }

    println!("\nEnter the source text (finish with a line reading '{SENTINEL}'):");
    let source = read_source(&mut rl)?;

    if source.is_empty() {
        return Ok(());
    }

    let keywords = KeywordSet::new(&words);
    let lexer = Lexer::new(&source, &keywords);

    println!("\nTokens found:");
    for token in lexer.scan_all() {
        if token.kind != TokenKind::Whitespace {
            println!("{token}");
        }
    }

    Ok(())
}

fn read_keywords(rl: &mut Editor<()>) -> Result<Vec<String>> {
    let mut words = Vec::new();

    while words.len() < MAX_KEYWORDS {
        println!("\nKeyword {}/{MAX_KEYWORDS}:", words.len() + 1);
        let line = match rl.readline("Enter a keyword (or press Enter to finish): ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };

        let word = line.trim().to_lowercase();
        if word.is_empty() {
            break;
        }
        println!("Keyword '{word}' added.");
        words.push(word);

        if words.len() < MAX_KEYWORDS {
            let answer = rl.readline("Add another keyword? (y/n): ")?;
            if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                break;
            }
        }
    }

    Ok(words)
}

fn read_source(rl: &mut Editor<()>) -> Result<String> {
    let mut source = String::new();

    loop {
        match rl.readline("") {
            Ok(line) if line == SENTINEL => break,
            Ok(line) => {
                source.push_str(&line);
                source.push('\n');
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(source)
}
