use super::convert;

#[test]
fn polish_digraphs() {
    assert_eq!(convert("polish", "Szczecin"), "Ščećin");
    assert_eq!(convert("polish", "CZEŚĆ"), "ČEŚĆ");
    assert_eq!(convert("polish", "rzeka"), "řeka");
}

#[test]
fn polish_single_letters() {
    assert_eq!(convert("polish", "Żółw"), "Žułv");
    assert_eq!(convert("polish", "mąka"), "mǫka");
}

#[test]
fn polish_softening_i() {
    assert_eq!(convert("polish", "Dzień dobry"), "Dźeń dobry");
    assert_eq!(convert("polish", "się"), "śę");
    assert_eq!(convert("polish", "NIE"), "ŃE");
    assert_eq!(convert("polish", "cicho"), "ćiho");
}

#[test]
fn czech_and_slovak() {
    assert_eq!(convert("czech", "chleba"), "hleba");
    assert_eq!(convert("czech", "dům"), "dum");
    assert_eq!(convert("slovak", "Chlieb"), "Hlieb");
    assert_eq!(convert("slovak", "kôň"), "kuoň");
}

#[test]
fn croatian() {
    assert_eq!(convert("croatian", "djed"), "đed");
    assert_eq!(convert("croatian", "Đakovo"), "Đakovo");
}

#[test]
fn latin_tables_are_language_local() {
    // Polish respellings do not apply to Czech text
    assert_eq!(convert("czech", "szczur"), "szczur");
    // and Cyrillic defaults never apply to Latin languages
    assert_eq!(convert("polish", "мир"), "мир");
}
