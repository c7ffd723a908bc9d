use crate::error::WinCleanError;
use crate::models::{Category, CleanerOption, RiskLevel, Selection};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Ordered list of cleanup options plus the default selection map.
///
/// The catalog is pure data handed to the generator, never baked into
/// generation logic, so an alternate command set (another OS, another
/// cleanup profile) can be swapped in via `from_json_file`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    options: Vec<CleanerOption>,
    defaults: HashMap<String, bool>,
}

/// On-disk shape of a replacement catalog.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    options: Vec<CleanerOption>,
    #[serde(default)]
    defaults: HashMap<String, bool>,
}

impl Catalog {
    pub fn new(
        options: Vec<CleanerOption>,
        defaults: HashMap<String, bool>,
    ) -> Result<Self, WinCleanError> {
        let mut seen = HashSet::new();
        for option in &options {
            if option.id.trim().is_empty() {
                return Err(WinCleanError::CatalogError(
                    "Option id cannot be empty".to_string(),
                ));
            }
            if !seen.insert(option.id.as_str()) {
                return Err(WinCleanError::CatalogError(format!(
                    "Duplicate option id: {}",
                    option.id
                )));
            }
        }
        for id in defaults.keys() {
            if !seen.contains(id.as_str()) {
                return Err(WinCleanError::CatalogError(format!(
                    "Default selection references unknown option id: {}",
                    id
                )));
            }
        }
        Ok(Self { options, defaults })
    }

    /// The built-in Windows C-drive catalog.
    pub fn builtin() -> Self {
        let options = vec![
            CleanerOption {
                id: "userTemp".to_string(),
                label: "用户临时文件".to_string(),
                description: "删除 %TEMP% 目录下的临时文件".to_string(),
                command: r#"del /f /s /q "%temp%\*.*" & rd /s /q "%temp%" & md "%temp%""#
                    .to_string(),
                category: Category::Disk,
                risk_level: RiskLevel::Low,
            },
            CleanerOption {
                id: "sysTemp".to_string(),
                label: "系统临时文件".to_string(),
                description: r"删除 C:\Windows\Temp 下的文件".to_string(),
                command:
                    r#"del /f /s /q "%windir%\Temp\*.*" & rd /s /q "%windir%\Temp" & md "%windir%\Temp""#
                        .to_string(),
                category: Category::System,
                risk_level: RiskLevel::Medium,
            },
            CleanerOption {
                id: "prefetch".to_string(),
                label: "预读取文件 (Prefetch)".to_string(),
                description: "清除 Windows 预读取缓存 (可能略微减慢首次启动速度)".to_string(),
                command: r#"del /f /s /q "%windir%\Prefetch\*.*""#.to_string(),
                category: Category::System,
                risk_level: RiskLevel::Low,
            },
            CleanerOption {
                id: "recycleBin".to_string(),
                label: "清空回收站".to_string(),
                description: "永久删除回收站中的所有文件".to_string(),
                command: r"rd /s /q %systemdrive%\$Recycle.bin".to_string(),
                category: Category::Disk,
                risk_level: RiskLevel::Medium,
            },
            CleanerOption {
                id: "logFiles".to_string(),
                label: "Windows 日志文件".to_string(),
                description: "删除系统根目录下的 .log 日志文件".to_string(),
                command: r#"del /f /s /q "%windir%\*.log""#.to_string(),
                category: Category::System,
                risk_level: RiskLevel::Low,
            },
            CleanerOption {
                id: "flushDns".to_string(),
                label: "刷新 DNS 缓存".to_string(),
                description: "重置网络 DNS 解析缓存".to_string(),
                command: "ipconfig /flushdns".to_string(),
                category: Category::Network,
                risk_level: RiskLevel::Low,
            },
            CleanerOption {
                id: "explorerRestart".to_string(),
                label: "重启资源管理器".to_string(),
                description: "重启 Explorer 进程以刷新图标和缓存".to_string(),
                command: "taskkill /f /im explorer.exe & start explorer.exe".to_string(),
                category: Category::System,
                risk_level: RiskLevel::Low,
            },
        ];

        let defaults = HashMap::from([
            ("userTemp".to_string(), true),
            ("sysTemp".to_string(), true),
            ("prefetch".to_string(), false),
            ("recycleBin".to_string(), false),
            ("logFiles".to_string(), false),
            ("flushDns".to_string(), true),
            ("explorerRestart".to_string(), false),
        ]);

        Self::new(options, defaults).expect("built-in catalog is well formed")
    }

    /// Load a replacement catalog from a JSON document.
    pub fn from_json_file(path: &Path) -> Result<Self, WinCleanError> {
        let contents = std::fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&contents)?;
        Self::new(file.options, file.defaults)
    }

    pub fn options(&self) -> &[CleanerOption] {
        &self.options
    }

    pub fn get(&self, id: &str) -> Option<&CleanerOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn is_default(&self, id: &str) -> bool {
        self.defaults.get(id).copied().unwrap_or(false)
    }

    /// The selection a fresh session starts from.
    pub fn default_selection(&self) -> Selection {
        let mut selection = Selection::new();
        for option in &self.options {
            selection.set(&option.id, self.is_default(&option.id));
        }
        selection
    }

    /// An all-excluded selection over this catalog's ids.
    pub fn empty_selection(&self) -> Selection {
        let mut selection = Selection::new();
        for option in &self.options {
            selection.set(&option.id, false);
        }
        selection
    }
}
