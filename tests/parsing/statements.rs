#[cfg(test)]
mod verify {
    use std::path::Path;

    use clfmt::language::*;
    use clfmt::parsing::*;

    #[test]
    fn command_with_parameters() {
        let statement = parse("CALL PGM(MYLIB/MYPGM) PARM('A' 'B')");

        assert_eq!(statement.label, None);
        assert_eq!(statement.command, "CALL");
        assert_eq!(statement.parameters.len(), 2);
        assert_eq!(statement.parameters[0].keyword, "PGM");
        assert_eq!(statement.parameters[0].value, Value::Scalar("MYLIB/MYPGM"));
        assert_eq!(statement.parameters[1].keyword, "PARM");
        assert_eq!(
            statement.parameters[1]
                .value
                .to_string(),
            "'A' 'B'"
        );
    }

    #[test]
    fn nested_parenthesis_in_value() {
        let statement = parse("MONMSG MSGID(CPF0000) EXEC(GOTO CMDLBL(ERROR))");

        assert_eq!(statement.parameters.len(), 2);
        let exec = statement
            .parameter("exec")
            .unwrap();
        assert_eq!(
            exec.value
                .to_string(),
            "GOTO CMDLBL(ERROR)"
        );
    }

    #[test]
    fn nothing_is_rejected() {
        let statement = parse("SNDMSG MSG('never closed");
        assert_eq!(statement.command, "SNDMSG");
        assert_eq!(statement.parameters.len(), 1);
        assert_eq!(
            statement.parameters[0]
                .value
                .to_string(),
            "'never closed"
        );

        let statement = parse("");
        assert_eq!(statement.command, "");
        assert!(statement
            .parameters
            .is_empty());

        let statement = parse(")) (( ''");
        assert!(statement
            .parameters
            .is_empty());
    }

    #[test]
    fn flat_text_of_parsed_statement() {
        let statement = parse("  CHGVAR   VAR(&X)   VALUE(  &Y   *CAT   'a  b' )");
        assert_eq!(statement.to_string(), "CHGVAR VAR(&X) VALUE(&Y *CAT 'a  b')");
    }

    #[test]
    fn statements_from_source() {
        let content = "\
/* Start */
LOOP: CHGVAR VAR(&I) +
        VALUE(&I + 1)

IF COND(&I *LT 10) THEN(GOTO CMDLBL(LOOP))
";
        let result = statements(content);
        assert_eq!(result.len(), 2);

        let first = parse(&result[0]);
        assert_eq!(first.label, Some("LOOP"));
        assert_eq!(first.command, "CHGVAR");
        assert_eq!(
            first
                .parameter("VALUE")
                .unwrap()
                .value
                .to_string(),
            "&I + 1"
        );

        let second = parse(&result[1]);
        assert_eq!(second.command, "IF");
        assert_eq!(second.parameters.len(), 2);
    }

    #[test]
    fn missing_file() {
        let filename = Path::new("tests/samples/does_not_exist.clle");
        let error = load(filename).unwrap_err();
        assert_eq!(error.problem, "File not found");
        assert_eq!(
            error.to_string(),
            "File not found: tests/samples/does_not_exist.clle"
        );

        let error = load_metadata(filename).unwrap_err();
        assert_eq!(error.problem, "File not found");
    }

    #[test]
    fn invalid_metadata() {
        let filename = Path::new("tests/samples/messy.clle");
        let error = load_metadata(filename).unwrap_err();
        assert_eq!(error.problem, "Invalid parameter metadata");
        assert!(!error
            .details
            .is_empty());
    }

    #[test]
    fn layout_configuration() {
        let layout = load_layout(Path::new("tests/samples/layout.json")).unwrap();
        assert_eq!(layout.right_margin, 80);
        assert_eq!(layout.case, KeywordCase::Lower);
        assert_eq!(layout.command_column, 14);
        assert_eq!(layout.continuation, '+');
    }
}
