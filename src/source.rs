use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use crate::error::{BorgError, Result};
use crate::pipeline::Assimilator;

pub const BANNER: &str =
    "borgify 0️⃣1️⃣  — < RESISTANCE IS FUTILE > Type a line to assimilate. Ctrl-D to quit.";
pub const FAREWELL: &str = "< YOU WILL BE ASSIMILATED >";
pub const PROMPT: &str = "> ";

/// Where lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Literal text given on the command line, treated as a single line.
    Text(String),
    File(PathBuf),
    Stdin,
    Interactive,
}

impl Input {
    /// Explicit arguments win: a single argument naming an existing file is read
    /// as a file, anything else is literal text. Without arguments, piped stdin is
    /// read line by line and a terminal gets the interactive prompt.
    pub fn resolve(args: &[String], stdin_is_terminal: bool) -> Self {
        if let [single] = args {
            let path = Path::new(single);
            if path.is_file() {
                return Input::File(path.to_path_buf());
            }
        }
        if !args.is_empty() {
            return Input::Text(args.join(" "));
        }
        if stdin_is_terminal {
            Input::Interactive
        } else {
            Input::Stdin
        }
    }

    pub fn run<W: Write>(&self, assimilator: &mut Assimilator, out: &mut W) -> Result<()> {
        match self {
            Input::Text(text) => {
                writeln!(out, "{}", assimilator.transform_line(text))?;
            }
            Input::File(path) => {
                let file = File::open(path).map_err(|source| BorgError::Io {
                    path: path.clone(),
                    source,
                })?;
                let count = run_lines(assimilator, BufReader::new(file), out)?;
                info!(path = %path.display(), lines = count, "file assimilated");
            }
            Input::Stdin => {
                let stdin = io::stdin();
                run_lines(assimilator, stdin.lock(), out)?;
            }
            Input::Interactive => run_interactive(assimilator, out)?,
        }
        Ok(())
    }
}

/// Writes one output line per input line, in order. Returns the number of lines.
pub fn run_lines<R: BufRead, W: Write>(
    assimilator: &mut Assimilator,
    reader: R,
    out: &mut W,
) -> Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        writeln!(out, "{}", assimilator.process_line(&line))?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Something that hands out one typed line per prompt.
pub trait LineEditor {
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, ReadlineError>;

    fn remember(&mut self, _line: &str) {}
}

impl LineEditor for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn remember(&mut self, line: &str) {
        if let Err(err) = self.add_history_entry(line) {
            debug!(%err, "history entry not recorded");
        }
    }
}

/// Interactive session on the terminal.
pub fn run_interactive<W: Write>(assimilator: &mut Assimilator, out: &mut W) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    run_prompt_loop(assimilator, &mut editor, out)
}

/// Prompt loop. End of input and Ctrl-C both end the session with [`FAREWELL`].
pub fn run_prompt_loop<E: LineEditor, W: Write>(
    assimilator: &mut Assimilator,
    editor: &mut E,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    out.flush()?;

    loop {
        match editor.read_line(PROMPT) {
            Ok(line) => {
                editor.remember(&line);
                writeln!(out, "{}", assimilator.transform_line(&line))?;
                out.flush()?;
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => {
                debug!("interactive session closed");
                writeln!(out, "\n{FAREWELL}")?;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::lexicon::Lexicon;
    use std::collections::VecDeque;

    struct Scripted {
        lines: VecDeque<std::result::Result<String, ReadlineError>>,
        history: Vec<String>,
    }

    impl Scripted {
        fn new(lines: Vec<std::result::Result<String, ReadlineError>>) -> Self {
            Self {
                lines: lines.into(),
                history: Vec::new(),
            }
        }
    }

    impl LineEditor for Scripted {
        fn read_line(&mut self, _prompt: &str) -> std::result::Result<String, ReadlineError> {
            self.lines.pop_front().unwrap_or(Err(ReadlineError::Eof))
        }

        fn remember(&mut self, line: &str) {
            self.history.push(line.to_string());
        }
    }

    fn quiet() -> Assimilator {
        Assimilator::new(Lexicon::bundled().unwrap(), Config::quiet(9)).unwrap()
    }

    #[test]
    fn test_resolve_dispatch() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().into_owned();

        assert_eq!(Input::resolve(&[path.clone()], true), Input::File(file.path().to_path_buf()));
        assert_eq!(
            Input::resolve(&["no-such-file.txt".to_string()], false),
            Input::Text("no-such-file.txt".to_string())
        );
        assert_eq!(
            Input::resolve(&["run".to_string(), "fast".to_string()], true),
            Input::Text("run fast".to_string())
        );
        assert_eq!(Input::resolve(&[], false), Input::Stdin);
        assert_eq!(Input::resolve(&[], true), Input::Interactive);
    }

    #[test]
    fn test_run_lines_order_and_attribution() {
        let mut borg = quiet();
        let input = "I love code.\n-- Jane Doe\n\nbanana!\n";
        let mut out = Vec::new();
        let count = run_lines(&mut borg, input.as_bytes(), &mut out).unwrap();

        assert_eq!(count, 4);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "We approve of subroutine.\n-- Jane Doe\n\nbanana!\n"
        );
    }

    #[test]
    fn test_text_input_is_one_line() {
        let mut borg = quiet();
        let mut out = Vec::new();
        Input::Text("-- my team".to_string()).run(&mut borg, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "-- our collective\n");
    }

    #[test]
    fn test_missing_file() {
        let mut borg = quiet();
        let mut out = Vec::new();
        let err = Input::File(PathBuf::from("missing/input.txt"))
            .run(&mut borg, &mut out)
            .unwrap_err();
        assert!(matches!(err, BorgError::Io { .. }));
    }

    #[test]
    fn test_prompt_loop_ends_on_eof() {
        let mut borg = quiet();
        let mut editor = Scripted::new(vec![Ok("run".to_string()), Err(ReadlineError::Eof)]);
        let mut out = Vec::new();
        run_prompt_loop(&mut borg, &mut editor, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{BANNER}\nexecute\n\n{FAREWELL}\n")
        );
        assert_eq!(editor.history, vec!["run".to_string()]);
    }

    #[test]
    fn test_prompt_loop_ends_on_interrupt() {
        let mut borg = quiet();
        let mut editor = Scripted::new(vec![Err(ReadlineError::Interrupted)]);
        let mut out = Vec::new();
        run_prompt_loop(&mut borg, &mut editor, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{BANNER}\n\n{FAREWELL}\n"));
        assert!(editor.history.is_empty());
    }

    #[test]
    fn test_prompt_loop_propagates_editor_failure() {
        let mut borg = quiet();
        let failure = io::Error::new(io::ErrorKind::Other, "tty gone");
        let mut editor = Scripted::new(vec![Err(ReadlineError::Io(failure))]);
        let mut out = Vec::new();
        let err = run_prompt_loop(&mut borg, &mut editor, &mut out).unwrap_err();
        assert!(matches!(err, BorgError::Readline(_)));
    }
}
