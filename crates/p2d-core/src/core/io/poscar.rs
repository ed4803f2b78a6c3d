use crate::core::io::traits::StructureFile;
use crate::core::models::group::{AtomGroup, CoordinateMode};
use crate::core::models::lattice::Lattice;
use crate::core::models::structure::Structure;
use nalgebra::Vector3;
use std::io::{self, BufRead};
use thiserror::Error;

const COMMENT_LINE: usize = 0;
const SCALE_LINE: usize = 1;
const LATTICE_LINES: [usize; 3] = [2, 3, 4];
const LABELS_LINE: usize = 5;
const COUNTS_LINE: usize = 6;
const MODE_LINE: usize = 7;
const FIRST_COORDINATE_LINE: usize = 8;

#[derive(Debug, Error)]
pub enum PoscarError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PoscarParseErrorKind,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoscarParseErrorKind {
    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("Invalid float in {field} (value: '{value}')")]
    InvalidFloat { field: &'static str, value: String },
    #[error("Invalid atom count (value: '{value}')")]
    InvalidCount { value: String },
    #[error("Expected at least {expected} values in {field}, found {found}")]
    TooFewValues {
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("No atom type labels declared")]
    NoAtomTypes,
    #[error("{labels} atom type label(s) but {counts} atom count(s)")]
    CountMismatch { labels: usize, counts: usize },
    #[error(
        "Unrecognized coordinate mode '{value}' (expected Direct, D, direct, Cartesian, C or cartesian)"
    )]
    UnknownCoordinateMode { value: String },
    #[error("Line is not valid UTF-8 text")]
    InvalidText,
}

impl PoscarError {
    fn parse(index: usize, kind: PoscarParseErrorKind) -> Self {
        PoscarError::Parse {
            line: index + 1,
            kind,
        }
    }
}

fn line_at<'a>(
    lines: &'a [String],
    index: usize,
    expected: &'static str,
) -> Result<&'a str, PoscarError> {
    lines
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| PoscarError::parse(index, PoscarParseErrorKind::UnexpectedEof { expected }))
}

fn parse_float(token: &str, index: usize, field: &'static str) -> Result<f64, PoscarError> {
    token.parse().map_err(|_| {
        PoscarError::parse(
            index,
            PoscarParseErrorKind::InvalidFloat {
                field,
                value: token.into(),
            },
        )
    })
}

fn parse_triple(line: &str, index: usize, field: &'static str) -> Result<[f64; 3], PoscarError> {
    let tokens: Vec<&str> = line.split_whitespace().take(3).collect();
    if tokens.len() < 3 {
        return Err(PoscarError::parse(
            index,
            PoscarParseErrorKind::TooFewValues {
                field,
                expected: 3,
                found: tokens.len(),
            },
        ));
    }
    Ok([
        parse_float(tokens[0], index, field)?,
        parse_float(tokens[1], index, field)?,
        parse_float(tokens[2], index, field)?,
    ])
}

pub struct PoscarFile;

impl StructureFile for PoscarFile {
    type Error = PoscarError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(PoscarError::parse(
                        lines.len(),
                        PoscarParseErrorKind::InvalidText,
                    ));
                }
                Err(e) => return Err(e.into()),
            }
        }

        let comment = line_at(&lines, COMMENT_LINE, "comment line")?
            .trim()
            .to_string();

        let scale_line = line_at(&lines, SCALE_LINE, "scaling factor")?;
        let scale_token = scale_line.split_whitespace().next().ok_or_else(|| {
            PoscarError::parse(
                SCALE_LINE,
                PoscarParseErrorKind::TooFewValues {
                    field: "scaling factor",
                    expected: 1,
                    found: 0,
                },
            )
        })?;
        let scale = parse_float(scale_token, SCALE_LINE, "scaling factor")?;

        let mut rows = [[0.0; 3]; 3];
        for (row, &index) in rows.iter_mut().zip(LATTICE_LINES.iter()) {
            let line = line_at(&lines, index, "lattice vector")?;
            *row = parse_triple(line, index, "lattice vector")?;
        }
        let lattice = Lattice::from_scaled_rows(scale, rows);

        let labels: Vec<&str> = line_at(&lines, LABELS_LINE, "atom type labels")?
            .split_whitespace()
            .collect();
        if labels.is_empty() {
            return Err(PoscarError::parse(
                LABELS_LINE,
                PoscarParseErrorKind::NoAtomTypes,
            ));
        }

        let counts = line_at(&lines, COUNTS_LINE, "atom counts")?
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| {
                    PoscarError::parse(
                        COUNTS_LINE,
                        PoscarParseErrorKind::InvalidCount {
                            value: token.into(),
                        },
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if counts.len() != labels.len() {
            return Err(PoscarError::parse(
                COUNTS_LINE,
                PoscarParseErrorKind::CountMismatch {
                    labels: labels.len(),
                    counts: counts.len(),
                },
            ));
        }

        let mode_line = line_at(&lines, MODE_LINE, "coordinate mode")?;
        let mode: CoordinateMode = mode_line.parse().map_err(|_| {
            PoscarError::parse(
                MODE_LINE,
                PoscarParseErrorKind::UnknownCoordinateMode {
                    value: mode_line.trim().into(),
                },
            )
        })?;

        let mut groups = Vec::with_capacity(labels.len());
        let mut index = FIRST_COORDINATE_LINE;
        for (type_index, (label, &count)) in labels.iter().zip(counts.iter()).enumerate() {
            // Counts are untrusted; never reserve more than the lines actually present.
            let mut coordinates = Vec::with_capacity(count.min(lines.len().saturating_sub(index)));
            for _ in 0..count {
                let line = line_at(&lines, index, "atom coordinates")?;
                let [x, y, z] = parse_triple(line, index, "atom coordinates")?;
                coordinates.push(Vector3::new(x, y, z));
                index += 1;
            }
            groups.push(AtomGroup::new(type_index + 1, label, coordinates));
        }

        Ok(Structure {
            comment,
            lattice,
            mode,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TI3AL: &str = "\
Ti3Al L1_2
1.0
4.0 0.0 0.0
0.0 4.0 0.0
0.0 0.0 4.0
Ti Al
3 1
Direct
0.0 0.5 0.5 Ti
0.5 0.0 0.5 Ti
0.5 0.5 0.0 Ti
0.0 0.0 0.0 Al
";

    fn expect_parse_error(text: &str) -> (usize, PoscarParseErrorKind) {
        match PoscarFile::read_from_str(text) {
            Err(PoscarError::Parse { line, kind }) => (line, kind),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn reads_header_and_groups_in_declaration_order() {
        let structure = PoscarFile::read_from_str(TI3AL).unwrap();

        assert_eq!(structure.comment, "Ti3Al L1_2");
        assert_eq!(structure.mode, CoordinateMode::Fractional);
        assert_eq!(structure.lattice.a(), Vector3::new(4.0, 0.0, 0.0));
        assert_eq!(structure.groups.len(), 2);
        assert_eq!(structure.groups[0].label, "Ti");
        assert_eq!(structure.groups[0].type_id, 1);
        assert_eq!(structure.groups[0].len(), 3);
        assert_eq!(structure.groups[1].label, "Al");
        assert_eq!(structure.groups[1].type_id, 2);
        assert_eq!(structure.groups[1].coordinates, vec![Vector3::zeros()]);
        assert_eq!(structure.atom_count(), 4);
    }

    #[test]
    fn scaling_factor_multiplies_lattice_vectors() {
        let text = TI3AL.replacen("1.0\n", "2.5\n", 1);
        let structure = PoscarFile::read_from_str(&text).unwrap();
        assert_eq!(structure.lattice.b(), Vector3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn cartesian_keyword_selects_absolute_mode() {
        let text = TI3AL.replace("Direct", "C");
        let structure = PoscarFile::read_from_str(&text).unwrap();
        assert_eq!(structure.mode, CoordinateMode::Absolute);
    }

    #[test]
    fn trailing_lines_after_last_block_are_ignored() {
        let text = format!("{}\n0.0 0.0 0.0 T T T\n", TI3AL);
        let structure = PoscarFile::read_from_str(&text).unwrap();
        assert_eq!(structure.atom_count(), 4);
    }

    #[test]
    fn too_few_coordinate_lines_is_a_parse_error() {
        let text = TI3AL.replace("3 1", "3 2");
        let (line, kind) = expect_parse_error(&text);
        assert_eq!(line, 13);
        assert_eq!(
            kind,
            PoscarParseErrorKind::UnexpectedEof {
                expected: "atom coordinates"
            }
        );
    }

    #[test]
    fn blank_line_inside_a_block_is_a_parse_error() {
        let text = TI3AL.replace("0.5 0.5 0.0 Ti\n", "\n");
        let (line, kind) = expect_parse_error(&text);
        assert_eq!(line, 11);
        assert!(matches!(
            kind,
            PoscarParseErrorKind::TooFewValues { found: 0, .. }
        ));
    }

    #[test]
    fn unknown_coordinate_mode_is_reported_on_line_eight() {
        let text = TI3AL.replace("Direct", "Selective dynamics");
        let (line, kind) = expect_parse_error(&text);
        assert_eq!(line, 8);
        assert_eq!(
            kind,
            PoscarParseErrorKind::UnknownCoordinateMode {
                value: "Selective dynamics".into()
            }
        );
    }

    #[test]
    fn malformed_numbers_are_reported_with_their_field() {
        let (line, kind) = expect_parse_error(&TI3AL.replace("0.0 4.0 0.0", "0.0 four 0.0"));
        assert_eq!(line, 4);
        assert_eq!(
            kind,
            PoscarParseErrorKind::InvalidFloat {
                field: "lattice vector",
                value: "four".into()
            }
        );

        let (line, kind) = expect_parse_error(&TI3AL.replace("3 1", "3 x"));
        assert_eq!(line, 7);
        assert_eq!(kind, PoscarParseErrorKind::InvalidCount { value: "x".into() });
    }

    #[test]
    fn label_and_count_lengths_must_match() {
        let (line, kind) = expect_parse_error(&TI3AL.replace("3 1", "4"));
        assert_eq!(line, 7);
        assert_eq!(
            kind,
            PoscarParseErrorKind::CountMismatch {
                labels: 2,
                counts: 1
            }
        );
    }

    #[test]
    fn oversized_count_is_reported_as_missing_lines() {
        let text = "x\n1.0\n1 0 0\n0 1 0\n0 0 1\nX\n100000000000000\nDirect\n0 0 0\n";
        let (line, kind) = expect_parse_error(text);
        assert_eq!(line, 10);
        assert_eq!(
            kind,
            PoscarParseErrorKind::UnexpectedEof {
                expected: "atom coordinates"
            }
        );

        let text = TI3AL.replace("3 1", &format!("3 {}", usize::MAX));
        let (line, _) = expect_parse_error(&text);
        assert_eq!(line, 13);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error_on_its_line() {
        let mut bytes = TI3AL.as_bytes().to_vec();
        let at = TI3AL.find("Ti Al").unwrap();
        bytes[at] = 0xFF;

        match PoscarFile::read_from(&mut bytes.as_slice()) {
            Err(PoscarError::Parse { line, kind }) => {
                assert_eq!(line, 6);
                assert_eq!(kind, PoscarParseErrorKind::InvalidText);
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn truncated_header_is_a_parse_error() {
        let (line, kind) = expect_parse_error("comment\n1.0\n1 0 0\n");
        assert_eq!(line, 4);
        assert_eq!(
            kind,
            PoscarParseErrorKind::UnexpectedEof {
                expected: "lattice vector"
            }
        );
    }
}
