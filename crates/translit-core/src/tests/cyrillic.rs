use super::convert;

#[test]
fn serbian_digraph_letters() {
    assert_eq!(convert("serbian", "Љубав"), "Ljubav");
    assert_eq!(convert("serbian", "Џеп"), "Džep");
    assert_eq!(convert("serbian", "ћерка"), "ćerka");
}

#[test]
fn serbian_mixed_script_digraph() {
    assert_eq!(convert("serbian", "Лjубав"), "Ljubav");
    assert_eq!(convert("serbian", "ЛJУБАВ"), "LJUBAV");
    // other languages read л and j separately
    assert_eq!(convert("russian", "Лj"), "Lj");
}

#[test]
fn macedonian() {
    assert_eq!(convert("macedonian", "Ѓорѓи"), "Ǵorǵi");
    assert_eq!(convert("macedonian", "ѕвезда"), "dzvezda");
}

#[test]
fn russian_defaults() {
    assert_eq!(convert("russian", "Москва"), "Moskva");
    assert_eq!(convert("russian", "Щука"), "Ščuka");
    assert_eq!(convert("russian", "ЖУК"), "ŽUK");
}

#[test]
fn two_letter_clusters() {
    assert_eq!(convert("russian", "Джон"), "Džon");
    assert_eq!(convert("russian", "ДЖЕМ"), "DŽEM");
}

#[test]
fn soft_sign() {
    assert_eq!(convert("russian", "день"), "denʼ");
    assert_eq!(convert("russian", "статья"), "statʼja");
    assert_eq!(convert("bulgarian", "шофьор"), "šofjor");
    assert_eq!(convert("russian", "почтальон"), "počtaľon");
}

#[test]
fn ukrainian() {
    assert_eq!(convert("ukrainian", "Гарний"), "Harnyj");
    assert_eq!(convert("ukrainian", "сьогодні"), "śohodni");
    assert_eq!(convert("ukrainian", "Їжак"), "Jižak");
}

#[test]
fn belarusian() {
    assert_eq!(convert("belarusian", "Беларусь"), "Bjelaruś");
    assert_eq!(convert("belarusian", "Воўк"), "Voŭk");
}

#[test]
fn bulgarian() {
    assert_eq!(convert("bulgarian", "България"), "Bǎlgarija");
    assert_eq!(convert("bulgarian", "щастие"), "štastie");
}

#[test]
fn sentence_with_punctuation() {
    assert_eq!(
        convert("russian", "Привет, мир! 2024"),
        "Privet, mir! 2024"
    );
}
