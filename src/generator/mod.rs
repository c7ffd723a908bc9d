use crate::catalog::Catalog;
use crate::models::Selection;
use chrono::NaiveDate;

/// Batch interpreters are line-sensitive and a bare LF is not always
/// accepted, so every line is terminated with CRLF.
const CRLF: &str = "\r\n";

/// 50-column banner separator.
const SEPARATOR: &str = "==================================================";

/// Render the full cleanup batch script for the given selection.
///
/// Pure and total: identical (selection, catalog, date) inputs produce
/// byte-identical output, and an empty selection still yields a valid
/// script containing only the preamble, the privilege check, and the
/// banners. Options are emitted in catalog order regardless of the order
/// they were toggled; ids missing from the catalog are ignored. Command
/// text is copied into the script verbatim - the catalog is trusted,
/// developer-authored configuration.
pub fn generate(selection: &Selection, catalog: &Catalog, date: NaiveDate) -> String {
    let mut script = String::new();
    let mut line = |text: &str| {
        script.push_str(text);
        script.push_str(CRLF);
    };

    line("@echo off");
    // Switch the console to UTF-8 before any Chinese text is echoed.
    line("chcp 65001 >nul");
    line(&format!(
        ":: Windows C 盘清理脚本生成于 {}",
        date.format("%Y-%m-%d")
    ));
    line(":: 请以管理员身份运行以获得最佳效果");
    line("");

    line("title WinClean Generator Output");
    line("color 0A");
    // Clear any garbage output from chcp or the initial read.
    line("cls");

    line(&format!("echo {}", SEPARATOR));
    line("echo           开始系统清理流程");
    line(&format!("echo {}", SEPARATOR));
    line("");

    line("echo 正在检查管理员权限...");
    line("net session >nul 2>&1");
    line("if %errorLevel% == 0 (");
    line("    echo 成功: 确认拥有管理员权限。");
    line(") else (");
    line("    echo 失败: 当前权限不足。");
    line("    echo 请右键点击脚本并选择 \"以管理员身份运行\"。");
    line("    pause");
    line("    exit");
    line(")");
    line("");

    for option in catalog.options() {
        if !selection.is_included(&option.id) {
            continue;
        }
        line(&format!(":: {}", option.label));
        line(&format!("echo 正在清理: {}...", option.label));
        line(&option.command);
        line("echo 完成。");
        line("");
    }

    line(&format!("echo {}", SEPARATOR));
    line("echo             清理任务执行完毕");
    line(&format!("echo {}", SEPARATOR));
    line("pause");

    script
}
