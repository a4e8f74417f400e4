use std::collections::BTreeMap;

use super::{LanguagePack, PluralMarks, Tokens, UnitNames, WordTables};

pub const CODE: &str = "syr";

const ONES: [&str; 20] = [
    "",
    "ܚܕ",
    "ܬܪܝܢ",
    "ܬܠܬܐ",
    "ܐܪܒܥܐ",
    "ܚܡܫܐ",
    "ܫܬܐ",
    "ܫܒܥܐ",
    "ܬܡܢܝܐ",
    "ܬܫܥܐ",
    "ܥܣܪܐ",
    "ܚܕܥܣܪ",
    "ܬܪܥܣܪ",
    "ܬܠܬܥܣܪ",
    "ܐܪܒܥܣܪ",
    "ܚܡܫܥܣܪ",
    "ܫܬܥܣܪ",
    "ܫܒܥܣܪ",
    "ܬܡܢܥܣܪ",
    "ܬܫܥܣܪ",
];

const TENS: [&str; 10] = [
    "",
    "ܥܣܪܐ",
    "ܥܣܪܝܢ",
    "ܬܠܬܝܢ",
    "ܐܪܒܥܝܢ",
    "ܚܡܫܝܢ",
    "ܫܬܝܢ",
    "ܫܒܥܝܢ",
    "ܬܡܢܝܢ",
    "ܬܫܥܝܢ",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ܡܐܐ",
    "ܬܪܝܢܡܐܐ",
    "ܬܠܬܡܐܐ",
    "ܐܪܒܥܡܐܐ",
    "ܚܡܫܡܐܐ",
    "ܫܬܡܐܐ",
    "ܫܒܥܡܐܐ",
    "ܬܡܢܡܐܐ",
    "ܬܫܥܡܐܐ",
];

// thousand, million, milliard, billion
const LARGE: [&str; 5] = ["", "ܐܠܦܐ", "ܡܠܝܘܢܐ", "ܡܠܝܪܐ", "ܒܠܝܘܢܐ"];

const ORDINAL_BASE: [(u64, &str); 38] = [
    (1, "ܩܕܡܝܐ"),
    (2, "ܬܪܝܢܐ"),
    (3, "ܬܠܝܬܝܐ"),
    (4, "ܪܒܝܥܝܐ"),
    (5, "ܚܡܝܫܝܐ"),
    (6, "ܫܬܝܬܝܐ"),
    (7, "ܫܒܝܥܝܐ"),
    (8, "ܬܡܝܢܝܐ"),
    (9, "ܬܫܝܥܝܐ"),
    (10, "ܥܣܝܪܝܐ"),
    (11, "ܚܕܥܣܪܝܐ"),
    (12, "ܬܪܥܣܪܝܐ"),
    (13, "ܬܠܬܥܣܪܝܐ"),
    (14, "ܐܪܒܥܣܪܝܐ"),
    (15, "ܚܡܫܥܣܪܝܐ"),
    (16, "ܫܬܥܣܪܝܐ"),
    (17, "ܫܒܥܣܪܝܐ"),
    (18, "ܬܡܢܥܣܪܝܐ"),
    (19, "ܬܫܥܣܪܝܐ"),
    (20, "ܥܣܪܝܢܝܐ"),
    (30, "ܬܠܬܝܢܝܐ"),
    (40, "ܐܪܒܥܝܢܝܐ"),
    (50, "ܚܡܫܝܢܝܐ"),
    (60, "ܫܬܝܢܝܐ"),
    (70, "ܫܒܥܝܢܝܐ"),
    (80, "ܬܡܢܝܢܝܐ"),
    (90, "ܬܫܥܝܢܝܐ"),
    (100, "ܡܐܝܐ"),
    (200, "ܬܪܝܢܡܐܝܐ"),
    (300, "ܬܠܬܡܐܝܐ"),
    (400, "ܐܪܒܥܡܐܝܐ"),
    (500, "ܚܡܫܡܐܝܐ"),
    (600, "ܫܬܡܐܝܐ"),
    (700, "ܫܒܥܡܐܝܐ"),
    (800, "ܬܡܢܡܐܝܐ"),
    (900, "ܬܫܥܡܐܝܐ"),
    (1000, "ܐܠܦܝܐ"),
    (1_000_000, "ܡܠܝܘܢܝܐ"),
];

const FRACTION: [&str; 3] = ["", "ܥܣܪܐ", "ܡܐܐ"];
const FRACTION_BIG: [&str; 4] = ["", "ܐܠܦܐ", "ܡܠܝܘܢܐ", "ܡܠܝܪܐ"];

fn words(table: &[&str]) -> Vec<String> {
    table.iter().map(|w| w.to_string()).collect()
}

fn unit(one: &str, many: &str) -> UnitNames {
    UnitNames {
        one: one.to_owned(),
        many: many.to_owned(),
    }
}

pub(super) fn pack() -> LanguagePack {
    LanguagePack {
        code: CODE.to_owned(),
        tables: WordTables {
            ones: words(&ONES),
            tens: words(&TENS),
            hundreds: words(&HUNDREDS),
            large: words(&LARGE),
            ordinal_base: ORDINAL_BASE
                .iter()
                .map(|(n, w)| (*n, w.to_string()))
                .collect::<BTreeMap<_, _>>(),
            fraction: words(&FRACTION),
            fraction_big: words(&FRACTION_BIG),
        },
        tokens: Tokens {
            separator: " ".to_owned(),
            conjoiner: " ܘ".to_owned(),
            negative: "ܣܚܘܦܐ".to_owned(),
            zero: "ܣܝܦܪ".to_owned(),
            infinity: "ܠܐ ܡܬܚܡܐ".to_owned(),
            half: "ܦܠܓܐ".to_owned(),
            fraction_of: "ܡܢ".to_owned(),
            power_of_ten: "ܥܦܝܦ ܥܣܪܐ ܒܚܝܠܐ ܕ".to_owned(),
            quarter: "ܪܘܒܥܐ".to_owned(),
            quarter_to: "ܩܐ".to_owned(),
            midnight: "ܛܗܪ̈ܝ ܠܠܝܐ".to_owned(),
            noon: "ܛܗܪܐ".to_owned(),
            before_noon: "ܩܕܡ ܛܗܪܐ".to_owned(),
            after_noon: "ܒܬܪ ܛܗܪܐ".to_owned(),
            now: "ܗܫܐ".to_owned(),
            seconds: unit("ܚܕ ܪܦܦܐ", "ܪ̈ܦܦܐ"),
            minutes: unit("ܚܕ ܩܛܝܢܬܐ", "ܩܛܝܢܬ̈ܐ"),
            hours: unit("ܚܕ ܫܥܬܐ", "ܫܥ̈ܐ"),
            days: unit("ܚܕ ܝܘܡܐ", "ܝܘܡܢ̈ܐ"),
        },
        plural: PluralMarks {
            consonant: 'ܪ',
            diacritic: '\u{0308}',
        },
    }
}
