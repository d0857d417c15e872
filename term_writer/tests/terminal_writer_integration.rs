// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end behavior of [`TerminalWriter`] against an in-memory output device.

use pretty_assertions::assert_eq;
use r3bl_term_writer::{FakeConsoleApi, MarkupSpec, OutputDevice, OutputDeviceExt,
                       PlatformKind, StdoutMock, Style, TermWriterError, TerminalEnv,
                       TerminalWriter, TerminalWriterConfig, char_count, char_width,
                       line_width};

fn new_writer(env: TerminalEnv) -> (TerminalWriter, StdoutMock) {
    let (device, mock) = OutputDevice::new_mock();
    let writer = TerminalWriter::new(
        TerminalWriterConfig::default()
            .with_output_device(device)
            .with_env(env)
            .without_highlighter(),
    );
    (writer, mock)
}

fn forced(on: bool) -> TerminalEnv { TerminalEnv::default().with_force_color(Some(on)) }

#[test]
fn test_ascii_width_equals_length() {
    for text in ["", "a", "hello world", "~!@#$%^&*()_+", "0123456789abcdef"] {
        assert_eq!(line_width(text), text.len());
    }
}

#[test]
fn test_each_fullwidth_char_adds_one() {
    for (text, wide_count) in [("a中b", 1), ("日本", 2), ("ｆｕｌｌ", 4), ("x한y글z", 2)] {
        assert_eq!(line_width(text), char_count(text) + wide_count, "{text:?}");
    }
}

#[test]
fn test_char_width_is_stable_across_lookups() {
    let before: Vec<usize> = ['a', '中', 'é', '→'].into_iter().map(char_width).collect();
    // Push every cached entry out.
    for c in '\u{4e00}'..'\u{4f00}' {
        let _ = char_width(c);
    }
    let after: Vec<usize> = ['a', '中', 'é', '→'].into_iter().map(char_width).collect();
    assert_eq!(before, after);
    assert_eq!(after, vec![1, 2, 1, 1]);
}

#[test]
fn test_line_position_across_writes() {
    let (mut writer, mock) = new_writer(forced(true));
    let none = MarkupSpec::new();

    writer.write("abc", &none).unwrap();
    writer.write("de", &MarkupSpec::from(Style::Red)).unwrap();
    assert_eq!(writer.chars_on_current_line(), 5);

    writer.write("x\ny", &none).unwrap();
    assert_eq!(writer.chars_on_current_line(), 1);
    assert_eq!(writer.width_of_current_line(), 1);

    writer.write("中文", &none).unwrap();
    assert_eq!(writer.chars_on_current_line(), 3);
    assert_eq!(writer.width_of_current_line(), 5);

    assert_eq!(
        mock.get_copy_of_buffer_as_string_strip_ansi(),
        "abcdex\ny中文"
    );
}

#[test]
fn test_wide_combining_marks_count_two_cells_on_the_line() {
    let (mut writer, _mock) = new_writer(forced(false));
    writer.write("a\u{302A}", &MarkupSpec::new()).unwrap();
    writer.write("\u{3164}", &MarkupSpec::new()).unwrap();
    assert_eq!(writer.chars_on_current_line(), 3);
    assert_eq!(writer.width_of_current_line(), 5);
}

#[test]
fn test_titled_separator_through_writer() {
    let (mut writer, mock) = new_writer(forced(false));
    writer.sep("-", Some("T"), Some(10), &MarkupSpec::new()).unwrap();

    let output = mock.get_copy_of_buffer_as_string();
    let line = output.strip_suffix('\n').unwrap();
    assert!(char_count(line) <= 10);
    let (left, right) = line.split_once(" T ").unwrap();
    assert!(char_count(right).abs_diff(char_count(left)) <= 1);
}

#[test]
fn test_untitled_separator_exact_multiple() {
    let (mut writer, mock) = new_writer(forced(false));
    writer.sep("=", None, Some(8), &MarkupSpec::new()).unwrap();
    assert_eq!(mock.get_copy_of_buffer_as_string(), "========\n");
}

#[test]
fn test_styled_separator_is_wrapped_in_sgr() {
    let (mut writer, mock) = new_writer(forced(true));
    writer.set_fullwidth(4);
    writer
        .sep("=", None, None, &MarkupSpec::from([Style::Yellow, Style::Bold]))
        .unwrap();
    assert_eq!(
        mock.get_copy_of_buffer_as_string(),
        "\x1b[33;1m====\x1b[0m\n"
    );
}

#[test]
fn test_markup_enabled_and_disabled() {
    let (enabled, _) = new_writer(forced(true));
    let styled = enabled.markup_with("hi", &[("bold", true)]).unwrap();
    assert_ne!(styled, "hi");
    let stripped = strip_ansi_escapes::strip_str(&styled);
    assert_eq!(stripped, "hi");

    let (disabled, _) = new_writer(forced(false));
    assert_eq!(disabled.markup_with("hi", &[("bold", true)]).unwrap(), "hi");
}

#[test]
fn test_unknown_markup_is_a_configuration_error() {
    let (mut writer, mock) = new_writer(forced(true));
    assert!(matches!(
        writer.markup_with("x", &[("wrongname", true)]),
        Err(TermWriterError::UnknownMarkup { .. })
    ));
    assert!(writer.write_with("x", &[("wrongname", true)]).is_err());
    assert_eq!(mock.write_count(), 0);
}

#[test]
fn test_source_block_length_mismatch_writes_nothing() {
    let (mut writer, mock) = new_writer(forced(false));
    let error = writer.write_source(&["a", "b"], &["  "]).unwrap_err();
    assert!(matches!(
        error,
        TermWriterError::IndentCountMismatch { indents: 1, lines: 2 }
    ));
    assert_eq!(
        error.to_string(),
        "indents size (1) should have same size as lines (2)"
    );
    assert_eq!(mock.write_count(), 0);
}

#[test]
fn test_forced_markup_ignores_tty_detection() {
    let (device, mock) = OutputDevice::new_mock_tty();
    let mut off_on_tty = TerminalWriter::new(
        TerminalWriterConfig::default()
            .with_output_device(device)
            .with_env(forced(false).with_term("xterm-256color"))
            .without_highlighter(),
    );
    off_on_tty.write("x", &MarkupSpec::from(Style::Red)).unwrap();
    assert!(!mock.get_copy_of_buffer_as_string().contains('\x1b'));

    let (mut on_off_tty, mock) = new_writer(forced(true).with_term("dumb"));
    on_off_tty.write("x", &MarkupSpec::from(Style::Red)).unwrap();
    assert!(mock.get_copy_of_buffer_as_string().contains('\x1b'));
}

#[test]
fn test_native_console_round_trip() {
    let console = FakeConsoleApi::new(0x0017);
    let (device, mock) = OutputDevice::new_mock_tty();
    let mut writer = TerminalWriter::new(
        TerminalWriterConfig::default()
            .with_output_device(device)
            .with_env(TerminalEnv::default().with_platform(PlatformKind::NativeConsole))
            .with_console_api(console.clone())
            .without_highlighter(),
    );

    writer.line_with("FAIL", &[("red", true), ("bold", true)]).unwrap();

    assert_eq!(console.set_history(), vec![0x001C, 0x0017]);
    assert_eq!(mock.get_copy_of_buffer_as_string(), "FAIL\n");
    assert_eq!(writer.chars_on_current_line(), 0);
}

#[test]
fn test_unsupported_platform_disables_detected_markup() {
    let (device, mock) = OutputDevice::new_mock_tty();
    let mut writer = TerminalWriter::new(
        TerminalWriterConfig::default()
            .with_output_device(device)
            .with_env(TerminalEnv::default().with_platform(PlatformKind::Unsupported))
            .without_highlighter(),
    );
    assert!(!writer.has_markup());
    writer.write("plain", &MarkupSpec::from(Style::Green)).unwrap();
    assert_eq!(mock.get_copy_of_buffer_as_string(), "plain");
}
