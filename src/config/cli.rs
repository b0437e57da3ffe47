use crate::domain::ports::Console;

/// 直接寫到標準輸出的 console
#[derive(Debug, Clone, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{}", text);
    }
}

/// 不輸出任何東西，搭配 `--json` 時使用
#[derive(Debug, Clone, Default)]
pub struct SilentConsole;

impl Console for SilentConsole {
    fn line(&self, _text: &str) {}
}
