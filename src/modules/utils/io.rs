use std::io::{self, BufRead, IsTerminal, Write};

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

/// Read one line from any buffered reader, without the trailing newline or surrounding whitespace.
///
/// Fails with `UnexpectedEof` once the input is exhausted.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    read_raw_line_from(reader).map(|line| line.trim().to_string())
}

/// Read one line keeping everything but the line terminator
fn read_raw_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    let line = input.strip_suffix('\n').unwrap_or(&input);
    Ok(line.strip_suffix('\r').unwrap_or(line).to_string())
}

/// True when an error only means there is nothing left to read
pub fn is_end_of_input(error: &io::Error) -> bool {
    error.kind() == io::ErrorKind::UnexpectedEof
}

/// Print a label and read the answer on the same line
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    read_line()
}

/// Print a label and read the answer without echoing it.
///
/// Piped input is read as a plain line so closed input is still detected.
pub fn prompt_secret(label: &str) -> io::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        rpassword::read_password()
    } else {
        read_raw_line_from(&mut stdin.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_from_trims() {
        let mut input = Cursor::new("  ada@example.com  \nsecond line\n\n");
        assert_eq!(read_line_from(&mut input).unwrap(), "ada@example.com");
        assert_eq!(read_line_from(&mut input).unwrap(), "second line");
        assert_eq!(read_line_from(&mut input).unwrap(), "");
    }

    #[test]
    fn test_closed_input_is_end_of_input() {
        let result = read_line_from(&mut Cursor::new(""));
        let error = result.unwrap_err();
        assert!(is_end_of_input(&error));

        // A final line without a newline is still returned before the end
        let mut input = Cursor::new("last");
        assert_eq!(read_line_from(&mut input).unwrap(), "last");
        assert!(is_end_of_input(&read_line_from(&mut input).unwrap_err()));

        assert!(!is_end_of_input(&io::Error::new(io::ErrorKind::Other, "boom")));
    }

    #[test]
    fn test_raw_line_keeps_inner_whitespace() {
        let mut input = Cursor::new(" secret pass \r\n");
        assert_eq!(read_raw_line_from(&mut input).unwrap(), " secret pass ");
    }
}
