use anyhow::Result;
use bizarro::parser::parse_value;
use bizarro::transform;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

fn main() -> Result<()> {
    // start reading lines
    let mut rl = rl_editor()?;
    loop {
        // get user input
        let input = rl.readline(">> ");
        let Ok(input) = input else {
            break;
        };
        if input == "exit" || input == "quit" {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        // Read
        let value = match parse_value(&input) {
            Ok(value) => value,
            Err(err) => {
                println!("Parse error: {err}");
                continue;
            },
        };

        // Transform
        let result = match transform(&value) {
            Ok(result) => result,
            Err(err) => {
                println!("Transform error: {err}");
                continue;
            },
        };

        // Print
        println!("{result}");
    }

    Ok(())
}

fn rl_editor() -> Result<Editor<(), DefaultHistory>> {
    let cfg = rustyline::Config::builder()
        .tab_stop(2)
        .auto_add_history(true)
        .bracketed_paste(true)
        .build();

    Ok(rustyline::DefaultEditor::with_config(cfg)?)
}
