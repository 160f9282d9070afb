use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Pause,
    Resume,
    RefreshNow,
    ExportCsv,
}

pub fn parse_main_command(key_code: &KeyCode) -> Option<UiCommand> {
    match key_code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'p' => Some(UiCommand::Pause),
            'r' => Some(UiCommand::Resume),
            'f' => Some(UiCommand::RefreshNow),
            'e' => Some(UiCommand::ExportCsv),
            _ => None,
        },
        _ => None,
    }
}
