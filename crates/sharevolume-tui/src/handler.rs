use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppResult};

pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    // 'CTRL + C' always exits
    if key_event.modifiers == KeyModifiers::CONTROL && key_event.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.form.focused {
        match key_event.code {
            // 'ENTER' -> submit the CIK
            KeyCode::Enter => app.submit(),

            // '<ESC>' -> leave the input
            KeyCode::Esc => app.blur_input(),

            KeyCode::Backspace => {
                app.form.input.pop();
            }

            KeyCode::Char(c) => app.form.input.push(c),

            _ => {}
        }
        return Ok(());
    }

    match key_event.code {
        // exit app with 'q' or '<ESC>'
        KeyCode::Esc | KeyCode::Char('q') => {
            app.quit();
        }

        // '/', 'i' or 'TAB' -> CIK input
        KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => app.focus_input(),

        // 'ENTER' -> resubmit whatever is in the input
        KeyCode::Enter => app.submit(),

        _ => {}
    }

    Ok(())
}
