use crossterm::event::KeyCode;

use fx_sentinel::input::{parse_main_command, UiCommand};

#[test]
fn letter_keys_map_to_commands() {
    assert_eq!(
        parse_main_command(&KeyCode::Char('p')),
        Some(UiCommand::Pause)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char('r')),
        Some(UiCommand::Resume)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char('f')),
        Some(UiCommand::RefreshNow)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char('e')),
        Some(UiCommand::ExportCsv)
    );
}

#[test]
fn commands_are_case_insensitive() {
    assert_eq!(
        parse_main_command(&KeyCode::Char('P')),
        Some(UiCommand::Pause)
    );
    assert_eq!(
        parse_main_command(&KeyCode::Char('E')),
        Some(UiCommand::ExportCsv)
    );
}

#[test]
fn unmapped_keys_are_ignored() {
    assert_eq!(parse_main_command(&KeyCode::Char('z')), None);
    assert_eq!(parse_main_command(&KeyCode::Enter), None);
    assert_eq!(parse_main_command(&KeyCode::Esc), None);
}
