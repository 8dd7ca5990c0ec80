//! Interactive shape factory demo.
//!
//! Reads shape names from stdin until an empty line, asking the factory to
//! build a randomly sized shape for each one, then prints a summary of every
//! shape created, in creation order. Unrecognized names get an error message
//! and another prompt; they never abort the session.

use std::io::{self, BufRead, Write};

use shape_factory::ShapeFactory;
use shape_types::Shape;

fn main() -> anyhow::Result<()> {
    let mut factory = ShapeFactory::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let shapes = collect_shapes(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut stderr.lock(),
        &mut factory,
    )?;
    write_summary(&mut stdout.lock(), &shapes)?;

    Ok(())
}

/// Prompts for shape names until an empty line (or end of input) and
/// returns the created shapes in entry order.
///
/// Only the trailing line ending is stripped from each line; interior and
/// edge whitespace reach the factory untouched, so `"circle "` is not a
/// shape.
fn collect_shapes(
    input: &mut impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    factory: &mut ShapeFactory,
) -> io::Result<Vec<Box<dyn Shape>>> {
    let mut shapes: Vec<Box<dyn Shape>> = Vec::new();
    let mut line = String::new();

    loop {
        write!(out, "Enter a shape (empty string to quit): ")?;
        out.flush()?;

        line.clear();
        let bytes_read = input.read_line(&mut line)?;
        let name = line.trim_end_matches(['\r', '\n']);

        if bytes_read == 0 || name.is_empty() {
            writeln!(out, "Done entering shapes.")?;
            writeln!(out)?;
            break;
        }

        match factory.create_shape(name) {
            Ok(shape) => shapes.push(shape),
            Err(_) => writeln!(err, "Hey! That's not a shape!")?,
        }
    }

    Ok(shapes)
}

/// Writes one line per shape, in creation order, with its type and area.
fn write_summary(out: &mut impl Write, shapes: &[Box<dyn Shape>]) -> io::Result<()> {
    for shape in shapes {
        writeln!(
            out,
            "Shape {} has area of {}",
            shape.type_name(),
            shape.area()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_factory::FactoryConfig;

    fn run_session(input: &[u8]) -> (Vec<Box<dyn Shape>>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut factory = ShapeFactory::with_config(&FactoryConfig::new().with_seed(1));

        let shapes = collect_shapes(&mut &input[..], &mut out, &mut err, &mut factory).unwrap();
        (
            shapes,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_session_collects_shapes_in_order() {
        let (shapes, out, err) = run_session(b"circle\nasdfsda\ntriangle\n\n");

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].type_name(), "Circle");
        assert_eq!(shapes[1].type_name(), "Triangle");

        // One error line for the bad name, one prompt per input line
        assert_eq!(err, "Hey! That's not a shape!\n");
        assert_eq!(out.matches("Enter a shape (empty string to quit): ").count(), 4);
        assert!(out.ends_with("Done entering shapes.\n\n"));
    }

    #[test]
    fn test_summary_lists_shapes_in_creation_order() {
        let (shapes, _, _) = run_session(b"circle\nasdfsda\ntriangle\n\n");

        let mut summary = Vec::new();
        write_summary(&mut summary, &shapes).unwrap();
        let summary = String::from_utf8(summary).unwrap();

        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Shape Circle has area of "));
        assert!(lines[1].starts_with("Shape Triangle has area of "));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        // No terminating empty line; EOF counts as done
        let (shapes, out, err) = run_session(b"rectangle\n");

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].type_name(), "Rectangle");
        assert!(err.is_empty());
        assert!(out.ends_with("Done entering shapes.\n\n"));
    }

    #[test]
    fn test_windows_line_endings() {
        let (shapes, _, err) = run_session(b"circle\r\n\r\n");

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].type_name(), "Circle");
        assert!(err.is_empty());
    }

    #[test]
    fn test_whitespace_only_line_is_not_a_shape() {
        let (shapes, _, err) = run_session(b"   \n\n");

        assert!(shapes.is_empty());
        assert_eq!(err, "Hey! That's not a shape!\n");
    }

    #[test]
    fn test_empty_session_has_empty_summary() {
        let (shapes, _, _) = run_session(b"\n");
        assert!(shapes.is_empty());

        let mut summary = Vec::new();
        write_summary(&mut summary, &shapes).unwrap();
        assert!(summary.is_empty());
    }
}
