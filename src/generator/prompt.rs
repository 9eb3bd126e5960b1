//! Generation prompt composition.
//!
//! One fixed template embedding the collected context plus the structural
//! requirements for the generated document. Raw markdown in, raw markdown
//! out - the model is instructed to skip all preamble.

use crate::analyzer::{ProjectContext, TemplateKind};

use super::client::MODEL_NAME;

/// Compose the generation prompt for `context` and the chosen blueprint.
pub fn compose_prompt(context: &ProjectContext, template: TemplateKind) -> String {
    let badges = serde_json::to_string(&context.badges).unwrap_or_default();

    format!(
        r#"
# Powered By: {model}
# Role: Elite Technical Documentation Architect & Copywriter
# Task: Generate an Industry-Standard, High-Conversion README.md for "{name}"

## 1. Project DNA Analysis
Project Description: {description}
Suggested Blueprint: {blueprint}
Project Root Structure:
{structure}

Source Logic Snippets (Analyzed for Architecture):
{deep_logic}

Environment Context: {env_context}
Badges: {badges}

## 2. Structural Requirements (PICTORIAL & SCHEMATIC)
Your output must be a single, cohesive Markdown document. **MAXIMIZE VISUALS, MINIMIZE TEXT.**

### 1️⃣ HEADER (VISUAL IMPACT)
- Enclose within a single <div align="center"> block.
- **Title**: High-impact H1.
- **Tagline**: Professional one-line tagline.
- **Badges**: Provided links.
- **Nav**: Clean [Features](#features) • [Installation](#installation) • [Usage](#usage) • [Architecture](#architecture).

---

### 2️⃣ THE VALUE (VISUAL)
- **Problem/Solution**: Keep it to 2-3 bullet points.
- **Quick-Start**: 1-step bash command.

---

### 3️⃣ ARCHITECTURE (FLOWCHART MANDATORY)
- **Logic Flow**: Use a **Mermaid.js** flowchart (`graph TD`) to visualize the project DNA/Flow.
- Analyze the Code Snippets provided.
- **Patterns**: List detected patterns in a Markdown table.

---

### 4️⃣ STRUCTURE (FIDELITY TREE)
- Provide a high-fidelity **ASCII Directory Tree**.
- Annotate key files/folders for their purpose.

---

### 5️⃣ SETUP & USAGE (DATA-DRIVEN)
- Use **Code Blocks** for all commands.
- **Configuration**: Use a **Markdown Table** for every environment variable or flag.
- **Dependencies**: Group in a clean table | Tool | Purpose | Version |.

---

### 6️⃣ ROADMAP (SCHEMATIC)
- Use a **Checklist** or a **Gantt-style** table for the roadmap.

## 3. Writing Constraints (CRITICAL)
- **Visuals > Text**: If information can be a table, it MUST be a table.
- **Density**: Use bolding and concise bullets. Delete all introductory filler ("In this section...").
- **No Preamble**: Return raw Markdown only.
"#,
        model = MODEL_NAME,
        name = context.name,
        description = context.description,
        blueprint = template.to_string().to_uppercase(),
        structure = context.structure.join("\n"),
        deep_logic = context.deep_logic,
        env_context = context.env_context,
        badges = badges,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{AssetScan, BadgeLinks, DependencyNames};

    fn sample_context() -> ProjectContext {
        ProjectContext {
            root: std::path::PathBuf::from("/tmp/demo"),
            name: "demo-api".to_string(),
            description: "A demo API".to_string(),
            dependencies: DependencyNames::default(),
            env_context: "PORT=3000".to_string(),
            has_tests: false,
            test_command: "npm test".to_string(),
            structure: vec!["package.json".to_string(), "server.js".to_string()],
            deep_logic: "\n--- SOURCE: server.js ---\nconsole.log('hi');\n".to_string(),
            suggested_type: TemplateKind::Enterprise,
            badges: BadgeLinks {
                node_version: "https://img.shields.io/badge/node->=18-green".to_string(),
                license: "https://img.shields.io/badge/license-MIT-blue".to_string(),
                version: "https://img.shields.io/badge/version-1.0.0-orange".to_string(),
            },
            assets: AssetScan::default(),
        }
    }

    #[test]
    fn test_prompt_embeds_context() {
        let prompt = compose_prompt(&sample_context(), TemplateKind::Enterprise);

        assert!(prompt.contains("README.md for \"demo-api\""));
        assert!(prompt.contains("Suggested Blueprint: ENTERPRISE"));
        assert!(prompt.contains("package.json\nserver.js"));
        assert!(prompt.contains("--- SOURCE: server.js ---"));
        assert!(prompt.contains("Environment Context: PORT=3000"));
        assert!(prompt.contains("img.shields.io/badge/license-MIT-blue"));
    }

    #[test]
    fn test_prompt_uppercases_blueprint() {
        let prompt = compose_prompt(&sample_context(), TemplateKind::Library);
        assert!(prompt.contains("Suggested Blueprint: LIBRARY"));
    }
}
