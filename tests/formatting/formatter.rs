#[cfg(test)]
mod verify {
    use clfmt::formatting::*;
    use clfmt::language::*;
    use clfmt::parsing::lexer::tokenize;
    use clfmt::parsing::parse;

    const SOURCES: [&str; 5] = [
        "START: SNDPGMMSG MSGID(CPF9898) MSGF(QSYS/QCPFMSG) MSGDTA('Nightly save has completed') TOMSGQ(*SYSOPR *EXT) MSGTYPE(*COMP)",
        "CHGVAR VAR(&MESSAGE) VALUE('Library ' *CAT &LIBRARY *TCAT ' contains ' *CAT &COUNT *TCAT ' objects')",
        "CPYF FROMFILE(QGPL/QCLSRC) TOFILE(QTEMP/QCLSRC) FROMMBR(*ALL) TOMBR(*FROMMBR) MBROPT(*REPLACE) CRTFILE(*YES)",
        "SBMJOB CMD(CALL PGM(NIGHTLY) PARM('A b c' 'D e f')) JOB(NIGHTLY) JOBQ(QSYS/QBATCH) LOG(4 0 *SECLVL)",
        "SNDPGMMSG MSG('Saved' ' ' 'QGPL' ' ' 'at' ' ' 'midnight' ' ' 'today') TOPGMQ(*EXT) MSGTYPE(*COMP)",
    ];

    fn collapse(text: &str) -> String {
        text.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn unwrap(lines: &[String]) -> String {
        let pieces: Vec<&str> = lines
            .iter()
            .map(|line| {
                line.strip_suffix(" +")
                    .unwrap_or(line)
            })
            .collect();
        collapse(&pieces.join(" "))
    }

    fn strings(source: &str) -> Vec<&str> {
        tokenize(source)
            .into_iter()
            .filter(|token| token.kind == TokenKind::StringLiteral)
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn labelled_message() {
        let statement = parse(SOURCES[0]);
        let lines = format_statement(&statement, &Layout::default());

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" START:"));
        assert_eq!(&lines[0][13..22], "SNDPGMMSG");
        assert_eq!(&lines[0][24..29], "MSGID");
        for line in &lines[1..] {
            assert!(line.starts_with(&" ".repeat(26)));
            assert_ne!(&line[26..27], " ");
        }
    }

    #[test]
    fn continuation_markers() {
        for source in SOURCES {
            let statement = parse(source);
            let lines = format_statement(&statement, &Layout::default());

            let (last, rest) = lines
                .split_last()
                .unwrap();
            for line in rest {
                assert!(line.ends_with(" +"), "{:?}", line);
            }
            assert!(!last.ends_with('+'));
        }
    }

    #[test]
    fn lines_fit_the_margin() {
        for margin in 70..=100 {
            let layout = Layout {
                right_margin: margin,
                ..Layout::default()
            };
            for source in SOURCES {
                let statement = parse(source);
                for line in format_statement(&statement, &layout) {
                    assert!(
                        line.chars()
                            .count()
                            <= margin,
                        "margin {}: {:?}",
                        margin,
                        line
                    );
                }
            }
        }
    }

    // Every line break falls outside quotes, so each line holds an even
    // number of quote characters.
    fn balanced(line: &str) -> bool {
        line.matches('\'')
            .count()
            % 2
            == 0
    }

    #[test]
    fn strings_never_split() {
        for margin in 40..=100 {
            let layout = Layout {
                right_margin: margin,
                ..Layout::default()
            };
            for source in SOURCES {
                let statement = parse(source);
                let lines = format_statement(&statement, &layout);

                for line in &lines {
                    assert!(balanced(line), "margin {}: {:?}", margin, lines);
                }

                for literal in strings(source) {
                    assert!(
                        lines
                            .iter()
                            .any(|line| line.contains(literal)),
                        "margin {}: {} split in {:?}",
                        margin,
                        literal,
                        lines
                    );
                }
            }
        }
    }

    #[test]
    fn adjacent_strings_stay_whole() {
        let statement = parse("X PARM('A' ' ' 'B')");
        for margin in 17..=45 {
            let layout = Layout {
                right_margin: margin,
                ..Layout::default()
            };
            let lines = format_statement(&statement, &layout);

            for line in &lines {
                assert!(balanced(line), "margin {}: {:?}", margin, lines);
            }
            assert_eq!(unwrap(&lines), "X PARM('A' ' ' 'B')", "margin {}", margin);
        }
    }

    #[test]
    fn content_preserved() {
        for margin in 40..=100 {
            let layout = Layout {
                right_margin: margin,
                ..Layout::default()
            };
            for source in SOURCES {
                let statement = parse(source);
                let lines = format_statement(&statement, &layout);

                let expected = match statement.label {
                    Some(label) => format!("{}: {}", label, statement),
                    None => statement.to_string(),
                };
                assert_eq!(unwrap(&lines), collapse(&expected), "margin {}", margin);
            }
        }
    }

    #[test]
    fn custom_columns() {
        let layout = Layout {
            label_column: 1,
            command_column: 8,
            parameter_column: 15,
            continuation_column: 17,
            right_margin: 50,
            continuation: '+',
            case: KeywordCase::Upper,
        };
        let statement = parse("L1: DLTF FILE(QTEMP/WORK) SYSTEM(*LCL) RMVCST(*RESTRICT)");

        assert_eq!(
            format_statement(&statement, &layout),
            vec![
                "L1:    DLTF   FILE(QTEMP/WORK) SYSTEM(*LCL) +",
                "                RMVCST(*RESTRICT)",
            ]
        );
    }
}
