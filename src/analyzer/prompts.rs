use crate::models::OutputLanguage;

pub struct PromptTemplate;

impl PromptTemplate {
    pub fn build_system_prompt(output_language: &OutputLanguage) -> String {
        match output_language {
            OutputLanguage::Chinese => "你是一位 Windows 系统管理专家。".to_string(),
            OutputLanguage::English => {
                "You are a Windows system administration expert.".to_string()
            }
        }
    }

    /// The analysis request prompt, with the generated script embedded
    /// verbatim. The script text must never be altered here - the report
    /// has to describe exactly the bytes the user will download.
    pub fn build_review_prompt(script: &str, output_language: &OutputLanguage) -> String {
        match output_language {
            OutputLanguage::Chinese => format!(
                r#"请分析以下 Windows 批处理脚本 (Batch Script)。

脚本内容:
```bat
{}
```

请提供以下分析：
1. 简要总结这个脚本的主要功能。
2. 列出任何潜在的风险或副作用（例如：“清空回收站是不可逆的操作”）。
3. 确认语法在 Windows 环境下是否看起来有效。

请使用中文回答，并使用 Markdown 格式，通过项目符号列表来清晰展示。"#,
                script
            ),
            OutputLanguage::English => format!(
                r#"Analyze the following Windows batch script.

SCRIPT CONTENT:
```bat
{}
```

Provide the following analysis:
1. A brief summary of the script's main function.
2. Any potential risks or side effects (for example: "emptying the Recycle Bin is irreversible").
3. Whether the syntax looks valid in a Windows environment.

Answer in English, formatted as Markdown with bullet lists."#,
                script
            ),
        }
    }
}
