use std::collections::HashMap;

lazy_static::lazy_static! {
    pub static ref ENGLISH_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Risk levels
        m.insert("risk_level_low", "LOW");
        m.insert("risk_level_medium", "MEDIUM");
        m.insert("risk_level_high", "HIGH");

        // Categories
        m.insert("category_disk", "disk");
        m.insert("category_network", "network");
        m.insert("category_system", "system");

        // Messages
        m.insert("message_analysis_error", "ANALYSIS ERROR");
        m.insert("message_missing_api_key", "API key is missing.");
        m.insert("message_analysis_failed", "Script analysis failed. Please try again.");
        m.insert("message_no_analysis", "No analysis result could be generated.");
        m.insert("message_analyzing", "Requesting AI analysis...");
        m.insert("message_script_written", "Script written to");
        m.insert("message_default_on", "on");
        m.insert("message_default_off", "off");

        // Descriptions
        m.insert("desc_missing_api_key", "Set the provider API key environment variable and retry.");
        m.insert("desc_analysis_failure", "Check your network connection or API key.");
        m.insert("desc_admin_hint", "Run the generated script as administrator so protected folders such as C:\\Windows\\Temp can be cleaned.");

        // Headers
        m.insert("report_header", "AI SECURITY ANALYSIS REPORT");
        m.insert("list_header", "CLEANUP OPTIONS");
        m.insert("list_hint", "Select the components to include in the cleanup script.");

        m
    };

    pub static ref CHINESE_STRINGS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();

        // Risk levels
        m.insert("risk_level_low", "低");
        m.insert("risk_level_medium", "中");
        m.insert("risk_level_high", "高");

        // Categories
        m.insert("category_disk", "磁盘");
        m.insert("category_network", "网络");
        m.insert("category_system", "系统");

        // Messages
        m.insert("message_analysis_error", "分析错误");
        m.insert("message_missing_api_key", "API 密钥缺失。");
        m.insert("message_analysis_failed", "脚本分析失败，请重试。");
        m.insert("message_no_analysis", "无法生成分析结果。");
        m.insert("message_analyzing", "正在请求 AI 分析...");
        m.insert("message_script_written", "脚本已写入");
        m.insert("message_default_on", "开");
        m.insert("message_default_off", "关");

        // Descriptions
        m.insert("desc_missing_api_key", "请配置 API 密钥后重试。");
        m.insert("desc_analysis_failure", "请检查您的网络连接或 API 密钥。");
        m.insert("desc_admin_hint", "生成的脚本必须以管理员身份运行，以便系统能够访问 C:\\Windows\\Temp 等受保护的文件夹。");

        // Headers
        m.insert("report_header", "AI 安全分析报告");
        m.insert("list_header", "清理选项");
        m.insert("list_hint", "选择您想要包含在清理脚本中的组件。");

        m
    };
}
