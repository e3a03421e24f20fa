//! @acp:module "Hook Selection"
//! @acp:summary "Picks tool-use hooks and describes how each one is wired"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Each [`HookKind`] knows the event it fires on, the tool matcher and the
//! shell script it runs; the settings writer groups them by event.

use serde::{Deserialize, Serialize};

use crate::answers::*;

/// Lifecycle event a hook is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HookEvent {
    PreToolUse,
    PostToolUse,
    Stop,
}

impl HookEvent {
    /// Key used in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::PreToolUse => "PreToolUse",
            HookEvent::PostToolUse => "PostToolUse",
            HookEvent::Stop => "Stop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookKind {
    TypescriptCheck,
    AutoFormat,
    ConsoleLogWarning,
    GitPushReview,
    DevServerTmux,
    TmuxReminder,
    DocFileBlock,
    PrHelper,
    FinalConsoleAudit,
}

impl HookKind {
    pub fn name(&self) -> &'static str {
        match self {
            HookKind::TypescriptCheck => "TypeScript Check",
            HookKind::AutoFormat => "Auto-format",
            HookKind::ConsoleLogWarning => "Console.log Warning",
            HookKind::GitPushReview => "Git Push Review",
            HookKind::DevServerTmux => "Dev Server Tmux",
            HookKind::TmuxReminder => "Tmux Reminder",
            HookKind::DocFileBlock => "Doc File Block",
            HookKind::PrHelper => "PR Helper",
            HookKind::FinalConsoleAudit => "Final Console Audit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HookKind::TypescriptCheck => "TypeScript check after editing .ts/.tsx files",
            HookKind::AutoFormat => "Auto-format JS/TS files with Prettier after edits",
            HookKind::ConsoleLogWarning => "Warn about console.log statements after edits",
            HookKind::GitPushReview => "Pause before git push to review changes",
            HookKind::DevServerTmux => {
                "Block dev servers outside tmux - ensures you can access logs"
            }
            HookKind::TmuxReminder => "Reminder to use tmux for long-running commands",
            HookKind::DocFileBlock => {
                "Block creation of random .md files - keeps docs consolidated"
            }
            HookKind::PrHelper => "Log PR URL and provide review command after PR creation",
            HookKind::FinalConsoleAudit => {
                "Final audit for console.log in modified files before session ends"
            }
        }
    }

    fn reason(&self) -> &'static str {
        match self {
            HookKind::TypescriptCheck => "TypeScript projects benefit from immediate type checking",
            HookKind::AutoFormat => "Maintains consistent formatting",
            HookKind::ConsoleLogWarning => "Prevents debug logs from reaching production",
            HookKind::GitPushReview => "Team collaboration requires careful push reviews",
            HookKind::DevServerTmux => "Ensures dev server logs are accessible",
            HookKind::TmuxReminder => "Session persistence for long-running tasks",
            HookKind::DocFileBlock => "Prevents documentation sprawl",
            HookKind::PrHelper => "Streamlines PR workflow",
            HookKind::FinalConsoleAudit => "Catches any missed debug logs",
        }
    }

    pub fn event(&self) -> HookEvent {
        match self {
            HookKind::GitPushReview
            | HookKind::DevServerTmux
            | HookKind::TmuxReminder
            | HookKind::DocFileBlock => HookEvent::PreToolUse,
            HookKind::TypescriptCheck
            | HookKind::AutoFormat
            | HookKind::ConsoleLogWarning
            | HookKind::PrHelper => HookEvent::PostToolUse,
            HookKind::FinalConsoleAudit => HookEvent::Stop,
        }
    }

    /// Tool matcher expression
    pub fn matcher(&self) -> &'static str {
        match self {
            HookKind::TypescriptCheck => {
                r#"tool == "Edit" && tool_input.file_path matches "\\.(ts|tsx)$""#
            }
            HookKind::AutoFormat | HookKind::ConsoleLogWarning => {
                r#"tool == "Edit" && tool_input.file_path matches "\\.(ts|tsx|js|jsx)$""#
            }
            HookKind::GitPushReview => r#"tool == "Bash" && tool_input.command matches "git push""#,
            HookKind::DevServerTmux => {
                r#"tool == "Bash" && tool_input.command matches "(npm run dev|pnpm( run)? dev|yarn dev|bun run dev)""#
            }
            HookKind::TmuxReminder => {
                r#"tool == "Bash" && tool_input.command matches "(npm (install|test)|pnpm (install|test)|yarn (install|test)|bun (install|test)|cargo build|make|docker|pytest|vitest|playwright)""#
            }
            HookKind::DocFileBlock => {
                r#"tool == "Write" && tool_input.file_path matches "\\.(md|txt)$" && !(tool_input.file_path matches "README\\.md|CLAUDE\\.md|AGENTS\\.md|CONTRIBUTING\\.md")"#
            }
            HookKind::PrHelper => r#"tool == "Bash""#,
            HookKind::FinalConsoleAudit => "*",
        }
    }

    /// Shell script run when the hook fires
    pub fn command(&self) -> &'static str {
        match self {
            HookKind::TypescriptCheck => TYPESCRIPT_CHECK,
            HookKind::AutoFormat => AUTO_FORMAT,
            HookKind::ConsoleLogWarning => CONSOLE_LOG_WARNING,
            HookKind::GitPushReview => GIT_PUSH_REVIEW,
            HookKind::DevServerTmux => DEV_SERVER_TMUX,
            HookKind::TmuxReminder => TMUX_REMINDER,
            HookKind::DocFileBlock => DOC_FILE_BLOCK,
            HookKind::PrHelper => PR_HELPER,
            HookKind::FinalConsoleAudit => FINAL_CONSOLE_AUDIT,
        }
    }
}

/// A hook picked for installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookSelection {
    pub hook: HookKind,
    pub name: String,
    pub description: String,
    pub reason: String,
}

impl From<HookKind> for HookSelection {
    fn from(hook: HookKind) -> Self {
        Self {
            hook,
            name: hook.name().to_string(),
            description: hook.description().to_string(),
            reason: hook.reason().to_string(),
        }
    }
}

pub fn select_hooks(answers: &Answers) -> Vec<HookSelection> {
    if !answers.enable_hooks {
        return Vec::new();
    }

    let mut hooks = Vec::new();
    if answers.uses_typescript() {
        hooks.extend([
            HookKind::TypescriptCheck,
            HookKind::AutoFormat,
            HookKind::ConsoleLogWarning,
        ]);
    }
    if answers.has_team() {
        hooks.push(HookKind::GitPushReview);
    }
    hooks.extend([HookKind::DevServerTmux, HookKind::TmuxReminder]);
    if answers.is_production_grade() {
        hooks.push(HookKind::DocFileBlock);
    }
    hooks.extend([HookKind::PrHelper, HookKind::FinalConsoleAudit]);

    hooks.into_iter().map(HookSelection::from).collect()
}

const DEV_SERVER_TMUX: &str = r#"#!/bin/bash
input=$(cat)
cmd=$(echo "$input" | jq -r '.tool_input.command // ""')

# Block dev servers that aren't run in tmux
echo '[Hook] BLOCKED: Dev server must run in tmux for log access' >&2
echo '[Hook] Use this command instead:' >&2
echo "[Hook] tmux new-session -d -s dev 'npm run dev'" >&2
echo '[Hook] Then: tmux attach -t dev' >&2
exit 1"#;

const TMUX_REMINDER: &str = r#"#!/bin/bash
input=$(cat)
if [ -z "$TMUX" ]; then
  echo '[Hook] Consider running in tmux for session persistence' >&2
  echo '[Hook] tmux new -s dev  |  tmux attach -t dev' >&2
fi
echo "$input""#;

const GIT_PUSH_REVIEW: &str = r#"#!/bin/bash
# Open editor for review before pushing
echo '[Hook] Review changes before push...' >&2
echo '[Hook] Press Enter to continue with push or Ctrl+C to abort...' >&2
read -r"#;

const DOC_FILE_BLOCK: &str = r#"#!/bin/bash
# Block creation of unnecessary documentation files
input=$(cat)
file_path=$(echo "$input" | jq -r '.tool_input.file_path // ""')

if [[ "$file_path" =~ \.(md|txt)$ ]] && [[ ! "$file_path" =~ (README|CLAUDE|AGENTS|CONTRIBUTING)\.md$ ]]; then
  echo "[Hook] BLOCKED: Unnecessary documentation file creation" >&2
  echo "[Hook] File: $file_path" >&2
  echo "[Hook] Use README.md for documentation instead" >&2
  exit 1
fi

echo "$input""#;

const PR_HELPER: &str = r#"#!/bin/bash
# Auto-detect PR creation and log useful info
input=$(cat)
cmd=$(echo "$input" | jq -r '.tool_input.command')

if echo "$cmd" | grep -qE 'gh pr create'; then
  output=$(echo "$input" | jq -r '.tool_output.output // ""')
  pr_url=$(echo "$output" | grep -oE 'https://github.com/[^/]+/[^/]+/pull/[0-9]+')

  if [ -n "$pr_url" ]; then
    echo "[Hook] PR created: $pr_url" >&2
    echo "[Hook] Checking GitHub Actions status..." >&2
    repo=$(echo "$pr_url" | sed -E 's|https://github.com/([^/]+/[^/]+)/pull/[0-9]+|\1|')
    pr_num=$(echo "$pr_url" | sed -E 's|.*/pull/([0-9]+)|\1|')
    echo "[Hook] To review PR: gh pr review $pr_num --repo $repo" >&2
  fi
fi

echo "$input""#;

const AUTO_FORMAT: &str = r#"#!/bin/bash
# Auto-format with Prettier after editing JS/TS files
input=$(cat)
file_path=$(echo "$input" | jq -r '.tool_input.file_path // ""')

if [ -n "$file_path" ] && [ -f "$file_path" ]; then
  if command -v prettier >/dev/null 2>&1; then
    prettier --write "$file_path" 2>&1 | head -5 >&2
  fi
fi

echo "$input""#;

const TYPESCRIPT_CHECK: &str = r#"#!/bin/bash
# Run TypeScript check after editing TS files
input=$(cat)
file_path=$(echo "$input" | jq -r '.tool_input.file_path // ""')

if [ -n "$file_path" ] && [ -f "$file_path" ]; then
  dir=$(dirname "$file_path")
  project_root="$dir"
  while [ "$project_root" != "/" ] && [ ! -f "$project_root/package.json" ]; do
    project_root=$(dirname "$project_root")
  done

  if [ -f "$project_root/tsconfig.json" ]; then
    cd "$project_root" && npx tsc --noEmit --pretty false 2>&1 | grep "$file_path" | head -10 >&2 || true
  fi
fi

echo "$input""#;

const CONSOLE_LOG_WARNING: &str = r#"#!/bin/bash
# Warn about console.log in edited files
input=$(cat)
file_path=$(echo "$input" | jq -r '.tool_input.file_path // ""')

if [ -n "$file_path" ] && [ -f "$file_path" ]; then
  console_logs=$(grep -n "console\.log" "$file_path" 2>/dev/null || true)

  if [ -n "$console_logs" ]; then
    echo "[Hook] WARNING: console.log found in $file_path" >&2
    echo "$console_logs" | head -5 >&2
    echo "[Hook] Remove console.log before committing" >&2
  fi
fi

echo "$input""#;

const FINAL_CONSOLE_AUDIT: &str = r#"#!/bin/bash
# Final check for console.logs in modified files
input=$(cat)

if git rev-parse --git-dir > /dev/null 2>&1; then
  modified_files=$(git diff --name-only HEAD 2>/dev/null | grep -E '\.(ts|tsx|js|jsx)$' || true)

  if [ -n "$modified_files" ]; then
    has_console=false
    while IFS= read -r file; do
      if [ -f "$file" ]; then
        if grep -q "console\.log" "$file" 2>/dev/null; then
          echo "[Hook] WARNING: console.log found in $file" >&2
          has_console=true
        fi
      fi
    done <<< "$modified_files"

    if [ "$has_console" = true ]; then
      echo "[Hook] Remove console.log statements before committing" >&2
    fi
  fi
fi

echo "$input""#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::fixtures::baseline;

    fn kinds(answers: &Answers) -> Vec<HookKind> {
        select_hooks(answers).into_iter().map(|h| h.hook).collect()
    }

    #[test]
    fn test_hooks_disabled_selects_nothing() {
        assert!(select_hooks(&baseline()).is_empty());
    }

    #[test]
    fn test_typescript_team_production_hooks() {
        let mut answers = baseline();
        answers.enable_hooks = true;
        answers.team_size = TeamSize::Small;
        answers.project_goal = ProjectGoal::Production;
        assert_eq!(
            kinds(&answers),
            vec![
                HookKind::TypescriptCheck,
                HookKind::AutoFormat,
                HookKind::ConsoleLogWarning,
                HookKind::GitPushReview,
                HookKind::DevServerTmux,
                HookKind::TmuxReminder,
                HookKind::DocFileBlock,
                HookKind::PrHelper,
                HookKind::FinalConsoleAudit,
            ]
        );
    }

    #[test]
    fn test_go_backend_skips_typescript_hooks() {
        let mut answers = baseline();
        answers.enable_hooks = true;
        answers.has_frontend = false;
        answers.backend_language = BackendLanguage::Go;
        let selected = kinds(&answers);
        assert!(!selected.contains(&HookKind::TypescriptCheck));
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_selection_carries_display_text() {
        let selection = HookSelection::from(HookKind::PrHelper);
        assert_eq!(selection.name, "PR Helper");
        assert_eq!(selection.reason, "Streamlines PR workflow");
        assert_eq!(selection.hook.event(), HookEvent::PostToolUse);
    }
}
