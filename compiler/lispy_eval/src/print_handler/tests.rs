use super::*;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("6.00");
    assert_eq!(handler.get_output(), "6.00\n");
}

#[test]
fn buffer_handler_multiple_prints() {
    let handler = BufferPrintHandler::new();
    handler.print("lispy");
    handler.print("> ");
    handler.println("{1.00}");
    assert_eq!(handler.get_output(), "lispy> {1.00}\n");
}

#[test]
fn shared_buffer_handler_dispatches() {
    let handler = buffer_handler();
    handler.println("Error: Division by zero");
    assert_eq!(handler.get_output(), "Error: Division by zero\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
}
