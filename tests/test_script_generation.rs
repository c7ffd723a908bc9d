use chrono::NaiveDate;
use wincleangen::{generate, Catalog};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

/// The full expected script for a single-option selection, line by line.
/// Every line is CRLF-terminated; this is the byte-exact output contract.
const EXPECTED_FLUSH_DNS_LINES: &[&str] = &[
    "@echo off",
    "chcp 65001 >nul",
    ":: Windows C 盘清理脚本生成于 2025-01-15",
    ":: 请以管理员身份运行以获得最佳效果",
    "",
    "title WinClean Generator Output",
    "color 0A",
    "cls",
    "echo ==================================================",
    "echo           开始系统清理流程",
    "echo ==================================================",
    "",
    "echo 正在检查管理员权限...",
    "net session >nul 2>&1",
    "if %errorLevel% == 0 (",
    "    echo 成功: 确认拥有管理员权限。",
    ") else (",
    "    echo 失败: 当前权限不足。",
    "    echo 请右键点击脚本并选择 \"以管理员身份运行\"。",
    "    pause",
    "    exit",
    ")",
    "",
    ":: 刷新 DNS 缓存",
    "echo 正在清理: 刷新 DNS 缓存...",
    "ipconfig /flushdns",
    "echo 完成。",
    "",
    "echo ==================================================",
    "echo             清理任务执行完毕",
    "echo ==================================================",
    "pause",
];

fn expected_flush_dns_script() -> String {
    let mut expected = String::new();
    for line in EXPECTED_FLUSH_DNS_LINES {
        expected.push_str(line);
        expected.push_str("\r\n");
    }
    expected
}

#[test]
fn test_single_option_script_is_byte_exact() {
    let catalog = Catalog::builtin();
    let mut selection = catalog.empty_selection();
    selection.set("flushDns", true);

    let script = generate(&selection, &catalog, date());
    assert_eq!(script, expected_flush_dns_script());
}

#[test]
fn test_generation_is_deterministic() {
    let catalog = Catalog::builtin();
    let first_selection = catalog.default_selection();
    let second_selection = catalog.default_selection();

    let first = generate(&first_selection, &catalog, date());
    let second = generate(&second_selection, &catalog, date());
    assert_eq!(first, second);
}

#[test]
fn test_empty_selection_yields_valid_skeleton() {
    let catalog = Catalog::builtin();
    let script = generate(&catalog.empty_selection(), &catalog, date());

    assert!(script.starts_with("@echo off\r\n"));
    assert!(script.contains("echo           开始系统清理流程\r\n"));
    assert!(script.contains("net session >nul 2>&1\r\n"));
    assert!(script.contains("echo             清理任务执行完毕\r\n"));
    assert!(script.ends_with("pause\r\n"));
    assert_eq!(script.matches("正在清理").count(), 0);
}

#[test]
fn test_no_bare_lf_anywhere() {
    let catalog = Catalog::builtin();
    let mut selection = catalog.default_selection();
    selection.set("recycleBin", true);

    let script = generate(&selection, &catalog, date());
    let mut previous = '\0';
    for c in script.chars() {
        if c == '\n' {
            assert_eq!(previous, '\r', "bare LF found in generated script");
        }
        previous = c;
    }
}

#[test]
fn test_date_comment_matches_supplied_date() {
    let catalog = Catalog::builtin();
    for (y, m, d, text) in [
        (2024, 12, 31, "2024-12-31"),
        (2025, 6, 1, "2025-06-01"),
        (2026, 2, 9, "2026-02-09"),
    ] {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let script = generate(&catalog.empty_selection(), &catalog, date);
        let comment = format!(":: Windows C 盘清理脚本生成于 {}\r\n", text);
        assert!(script.contains(&comment), "missing date comment for {}", text);
    }
}

#[test]
fn test_multi_selection_blocks_in_catalog_order() {
    let catalog = Catalog::builtin();
    let mut selection = catalog.empty_selection();
    // Enabled in an order unrelated to the catalog's.
    for id in ["explorerRestart", "userTemp", "recycleBin"] {
        selection.set(id, true);
    }

    let script = generate(&selection, &catalog, date());
    let positions: Vec<usize> = ["用户临时文件", "清空回收站", "重启资源管理器"]
        .iter()
        .map(|label| script.find(label).unwrap())
        .collect();

    assert!(positions[0] < positions[1]);
    assert!(positions[1] < positions[2]);
    assert_eq!(script.matches("正在清理").count(), 3);
}

#[test]
fn test_commands_emitted_verbatim() {
    let catalog = Catalog::builtin();
    let mut selection = catalog.empty_selection();
    for option in catalog.options() {
        selection.set(&option.id, true);
    }

    let script = generate(&selection, &catalog, date());
    for option in catalog.options() {
        let line = format!("{}\r\n", option.command);
        assert!(script.contains(&line), "command not verbatim: {}", option.id);
    }
}
