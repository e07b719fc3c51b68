#[cfg(test)]
mod verify {
    use std::collections::HashSet;
    use std::path::Path;

    use clfmt::formatting::*;
    use clfmt::language::*;
    use clfmt::parsing::values::*;
    use clfmt::parsing::*;

    fn metadata() -> Vec<ParameterMetadata> {
        load_metadata(Path::new("tests/samples/metadata.json")).unwrap()
    }

    fn round_trip(source: &str) -> String {
        let metadata = metadata();
        let statement = parse(source);
        let values = extract(&statement, &metadata);
        let present = keywords(&statement);
        assemble(statement.command, &metadata, &values, &present)
    }

    #[test]
    fn call_with_parameters() {
        assert_eq!(
            round_trip("CALL PGM(MYLIB/MYPGM) PARM('A' 'B')"),
            "CALL PGM(MYLIB/MYPGM) PARM('A' 'B')"
        );
    }

    #[test]
    fn qualified_object() {
        assert_eq!(
            round_trip("CHKOBJ OBJ(MYLIB/MYOBJ)"),
            "CHKOBJ OBJ(MYLIB/MYOBJ)"
        );
        assert_eq!(
            round_trip("chkobj objtype(*pgm) obj(mylib/myobj)"),
            "chkobj OBJ(MYLIB/MYOBJ) OBJTYPE(*PGM)"
        );
    }

    #[test]
    fn library_list() {
        assert_eq!(
            round_trip("RSTLIBL TOLIBL(LIBA LIBB LIBC)"),
            "RSTLIBL TOLIBL(LIBA LIBB LIBC)"
        );
    }

    #[test]
    fn embedded_quotes() {
        assert_eq!(
            round_trip("CRTPF TEXT('Sample ''quoted'' text')"),
            "CRTPF TEXT('Sample ''quoted'' text')"
        );
    }

    #[test]
    fn canonical_order() {
        assert_eq!(
            round_trip("SNDPGMMSG MSGTYPE(*ESCAPE) MSGDTA('Failed') MSGF(QCPFMSG) MSGID(CPF9898)"),
            "SNDPGMMSG MSGID(CPF9898) MSGF(QCPFMSG) MSGDTA('Failed') MSGTYPE(*ESCAPE)"
        );
        assert_eq!(
            round_trip("SNDPGMMSG TOMSGQ(*SYSOPR *EXT) MSGID(CPF9898)"),
            "SNDPGMMSG MSGID(CPF9898) TOMSGQ(*SYSOPR *EXT)"
        );
    }

    #[test]
    fn stable_under_repetition() {
        let once = round_trip("sndpgmmsg msgdta('it''s done') msgid(cpf9898) msgf(*libl/qcpfmsg)");
        assert_eq!(
            once,
            "sndpgmmsg MSGID(CPF9898) MSGF(*LIBL/QCPFMSG) MSGDTA('it''s done')"
        );
        assert_eq!(round_trip(&once), once);
    }

    #[test]
    fn explicit_default_kept() {
        assert_eq!(
            round_trip("CHKOBJ OBJ(X) OBJTYPE(*ALL)"),
            "CHKOBJ OBJ(X) OBJTYPE(*ALL)"
        );
    }

    #[test]
    fn implicit_default_omitted() {
        let metadata = metadata();
        let mut values = ParameterMap::new();
        values.insert("OBJ".to_string(), ParameterValue::from(vec!["X", "QGPL"]));
        values.insert("OBJTYPE".to_string(), ParameterValue::from("*ALL"));
        values.insert("MSGTYPE".to_string(), ParameterValue::from("*INFO"));

        let mut present = HashSet::new();
        present.insert("OBJ".to_string());

        assert_eq!(
            assemble("CHKOBJ", &metadata, &values, &present),
            "CHKOBJ OBJ(QGPL/X)"
        );
    }

    #[test]
    fn free_text_is_quoted() {
        let metadata = metadata();
        let mut values = ParameterMap::new();
        values.insert("MSGID".to_string(), ParameterValue::from("CPF9898"));
        values.insert("MSGDTA".to_string(), ParameterValue::from("Hello, world"));

        let present: HashSet<String> = values
            .keys()
            .cloned()
            .collect();

        assert_eq!(
            assemble("SNDPGMMSG", &metadata, &values, &present),
            "SNDPGMMSG MSGID(CPF9898) MSGDTA('Hello, world')"
        );
    }

    #[test]
    fn unknown_keywords_and_library_list_prefix() {
        assert_eq!(round_trip("*LIBL/CALL PGM(X) WHATEVER(Y)"), "CALL PGM(X)");
    }
}
