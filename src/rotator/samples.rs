// Fixed sample content for the rotating log panel

/// Source snippet shown by the code sample generator
pub const CODE: &str = r#"/// Iterate and yield each value with flags for first and last.
pub fn loop_first_last<T>(values: impl IntoIterator<Item = T>) -> Vec<(bool, bool, T)> {
    let mut iter = values.into_iter().peekable();
    let mut out = Vec::new();
    let mut first = true;
    while let Some(value) = iter.next() {
        let last = iter.peek().is_none();
        out.push((first, last, value));
        first = false;
    }
    out
}"#;

/// Language tag of [`CODE`]
pub const CODE_LANGUAGE: &str = "rust";

/// Men's 100m butterfly final, Rio 2016. Indented on purpose: fields are trimmed.
pub const SWIMMERS_CSV: &str = "lane,swimmer,country,time
                4,Joseph Schooling,Singapore,50.39
                2,Michael Phelps,United States,51.14
                5,Chad le Clos,South Africa,51.14
                6,László Cseh,Hungary,51.14
                3,Li Zhuhao,China,51.26
                8,Mehdy Metella,France,51.58
                7,Tom Shields,United States,51.73
                1,Aleksandr Sadovnikov,Russia,51.84";

/// Winning time in hundredths of a second, fed to the fault demo
pub const WINNING_TIME_CENTIS: u32 = 5039;

/// Lap count used by the fault demo. Zero, so the pace calculation always faults.
pub const FAULT_DEMO_LAPS: u32 = 0;
