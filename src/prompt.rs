use crate::constants::{DEFAULT_JPG_QUALITY, DEFAULT_PNG_QUALITY, MAX_QUALITY};
use crate::error::{Result, SqueezeError};
use std::io::{self, BufRead, Write};

/// Answers collected from the interactive prompt sequence. Built once at
/// startup and passed by reference from then on.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Local directory path, or a URL when it contains "http".
    pub target: String,
    pub jpg_quality: u8,
    pub png_quality: u8,
    pub should_move: bool,
    pub show_log: bool,
}

/// Runs the five-field prompt sequence against stdin.
pub fn collect_config() -> Result<RunConfig> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    collect_config_from(&mut input)
}

/// Same as [`collect_config`] but reads from any `BufRead`, which keeps the
/// prompt loop testable without a terminal.
pub fn collect_config_from<R: BufRead>(input: &mut R) -> Result<RunConfig> {
    let target = ask(input, "Directory or URL of images to compress", parse_target)?;
    let jpg_quality = ask(input, "Quality of compressed .jpg files (% quality)", |s| {
        parse_quality(s, DEFAULT_JPG_QUALITY)
    })?;
    let png_quality = ask(input, "Quality of compressed .png files (% quality)", |s| {
        parse_quality(s, DEFAULT_PNG_QUALITY)
    })?;
    let should_move = ask(input, "Move .min.* files into the base directory?", |s| {
        parse_answer(s, false)
    })?;
    let show_log = ask(input, "Show log?", |s| parse_answer(s, true))?;

    Ok(RunConfig {
        target,
        jpg_quality,
        png_quality,
        should_move,
        show_log,
    })
}

/// Prompts for one field, re-prompting until the answer validates. EOF on
/// the input is fatal.
fn ask<R, T, F>(input: &mut R, description: &str, parse: F) -> Result<T>
where
    R: BufRead,
    F: Fn(&str) -> Result<T>,
{
    loop {
        print!("{}: ", description);
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(SqueezeError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all prompts were answered",
            )));
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("{}", e),
        }
    }
}

pub fn parse_target(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(SqueezeError::InvalidAnswer(
            "Must be a directory or URL".to_string(),
        ));
    }
    Ok(input.to_string())
}

pub fn parse_quality(input: &str, default: u8) -> Result<u8> {
    if input.is_empty() {
        return Ok(default);
    }
    // Digits only: `u8::parse` would also take a leading `+`.
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SqueezeError::InvalidAnswer(
            "Must be a valid number".to_string(),
        ));
    }
    let value: u8 = input
        .parse()
        .map_err(|_| SqueezeError::InvalidAnswer("Must be a valid number".to_string()))?;
    if value > MAX_QUALITY {
        return Err(SqueezeError::InvalidQuality(value));
    }
    Ok(value)
}

pub fn parse_answer(input: &str, default: bool) -> Result<bool> {
    match input {
        "" => Ok(default),
        "Yes" => Ok(true),
        "No" => Ok(false),
        _ => Err(SqueezeError::InvalidAnswer("Must be Yes or No".to_string())),
    }
}
