use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cozy_chess::Board;

pub struct Input {
    pub fen: String,
    pub board: Board,
}

/// Positions from `--fen` first, then from the file, in the order given.
pub fn collect(fens: &[String], file: Option<&Path>) -> Result<Vec<Input>, Box<dyn Error>> {
    let mut inputs = Vec::with_capacity(fens.len());

    for (idx, fen) in fens.iter().enumerate() {
        inputs.push(parse(fen, &format!("--fen #{}", idx + 1))?);
    }

    if let Some(path) = file {
        let reader = BufReader::new(File::open(path)?);
        inputs.extend(read(reader, &path.display().to_string())?);
    }

    if inputs.is_empty() {
        return Err("no positions given, use --fen or --file".into());
    }

    Ok(inputs)
}

pub fn read<R: BufRead>(reader: R, origin: &str) -> Result<Vec<Input>, Box<dyn Error>> {
    let mut inputs = Vec::new();

    for (idx, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let fen = line.trim();
        if fen.is_empty() || fen.starts_with('#') {
            continue;
        }
        inputs.push(parse(fen, &format!("{}:{}", origin, idx + 1))?);
    }

    Ok(inputs)
}

fn parse(fen: &str, origin: &str) -> Result<Input, Box<dyn Error>> {
    let board = fen
        .parse::<Board>()
        .map_err(|e| format!("{}: invalid FEN '{}': {}", origin, fen, e))?;

    Ok(Input {
        fen: fen.to_string(),
        board,
    })
}
