//! Multi-frame XYZ trajectory reader.

use basis::element;
use color_eyre::eyre::{eyre, Result, WrapErr};
use nalgebra::Vector3;
use std::fs;
use std::path::Path;

/// One geometry of a trajectory: atomic numbers and positions in Å.
#[derive(Debug, Clone, PartialEq)]
pub struct XyzFrame {
    pub comment: String,
    pub atomic_numbers: Vec<i64>,
    pub coords: Vec<Vector3<f64>>,
}

pub fn read_xyz_trajectory(path: impl AsRef<Path>) -> Result<Vec<XyzFrame>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read trajectory: {}", path.display()))?;
    parse_xyz(&content).wrap_err_with(|| format!("Malformed trajectory: {}", path.display()))
}

/// Parse concatenated XYZ blocks. The element column may hold a symbol in
/// any case or an atomic number.
pub fn parse_xyz(content: &str) -> Result<Vec<XyzFrame>> {
    let mut lines = content.lines().enumerate().peekable();
    let mut frames = Vec::new();

    loop {
        // skip blank lines between frames
        while lines.peek().is_some_and(|(_, l)| l.trim().is_empty()) {
            lines.next();
        }
        let Some((line_no, header)) = lines.next() else { break };

        let n_atoms: usize = header
            .trim()
            .parse()
            .map_err(|_| eyre!("line {}: expected an atom count, got '{}'", line_no + 1, header.trim()))?;
        let comment = lines
            .next()
            .map(|(_, l)| l.trim().to_string())
            .ok_or_else(|| eyre!("line {}: missing comment line", line_no + 2))?;

        // the header count is untrusted until the atom lines are read
        let mut atomic_numbers = Vec::new();
        let mut coords = Vec::new();
        for _ in 0..n_atoms {
            let (line_no, line) = lines
                .next()
                .ok_or_else(|| eyre!("frame {}: expected {} atoms", frames.len(), n_atoms))?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 4 {
                return Err(eyre!("line {}: expected 'element x y z'", line_no + 1));
            }

            let z = match tokens[0].parse::<i64>() {
                Ok(z) => z,
                Err(_) => element::atomic_number(tokens[0])
                    .map(i64::from)
                    .wrap_err_with(|| format!("line {}", line_no + 1))?,
            };
            let mut xyz = [0.0; 3];
            for (value, token) in xyz.iter_mut().zip(&tokens[1..4]) {
                *value = token
                    .parse()
                    .map_err(|_| eyre!("line {}: invalid coordinate '{}'", line_no + 1, token))?;
            }
            atomic_numbers.push(z);
            coords.push(Vector3::new(xyz[0], xyz[1], xyz[2]));
        }

        frames.push(XyzFrame {
            comment,
            atomic_numbers,
            coords,
        });
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAJECTORY: &str = "\
3
frame 0
O   0.000  0.000  0.117
H   0.000  0.757 -0.469
h   0.000 -0.757 -0.469

3
frame 1
8   0.000  0.000  0.120
1   0.000  0.760 -0.470
1   0.000 -0.760 -0.470
";

    #[test]
    fn test_parse_frames() {
        let frames = parse_xyz(TRAJECTORY).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].comment, "frame 0");
        assert_eq!(frames[0].atomic_numbers, vec![8, 1, 1]);
        assert_eq!(frames[1].atomic_numbers, vec![8, 1, 1]);
        assert_eq!(frames[1].coords[1], Vector3::new(0.0, 0.76, -0.47));
    }

    #[test]
    fn test_malformed_input() {
        assert!(parse_xyz("two\ncomment\n").is_err());
        assert!(parse_xyz("2\ncomment\nH 0 0 0\n").is_err());
        assert!(parse_xyz("1\ncomment\nQq 0 0 0\n").is_err());
        assert!(parse_xyz("1\ncomment\nH 0 zero 0\n").is_err());
        assert!(parse_xyz("").unwrap().is_empty());
    }

    #[test]
    fn test_oversized_atom_count() {
        let err = parse_xyz("18446744073709551615\ncomment\nH 0 0 0\n").unwrap_err();
        assert!(err.to_string().contains("expected 18446744073709551615 atoms"), "{err}");
        assert!(parse_xyz("100000000\ncomment\nH 0 0 0\n").is_err());
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("traj.xyz");
        fs::write(&path, TRAJECTORY).unwrap();
        assert_eq!(read_xyz_trajectory(&path).unwrap().len(), 2);
    }
}
