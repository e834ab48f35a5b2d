//! Clipboard and text-to-speech services used by the result panels.

use std::{
    io::{self, Write as _},
    process::{Command, ExitStatus, Stdio},
    thread,
};

use anyhow::{bail, Context, Result};
use arboard::Clipboard;

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to write clipboard")?;
    Ok(())
}

/// Primary language subtag of a BCP 47 tag (`id-ID` -> `id`).
fn language_of(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or(locale)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Text goes through stdin instead of the argument list.
    pub text_on_stdin: bool,
}

impl SpeechCommand {
    /// Engine taking `text` as its final argument, after `--` so a leading `-` is not an option.
    fn with_text_arg(program: &str, mut args: Vec<String>, text: &str) -> Self {
        args.push("--".to_string());
        args.push(text.to_string());
        Self {
            program: program.to_string(),
            args,
            text_on_stdin: false,
        }
    }
}

/// macOS voice for a language subtag; `None` keeps the system default voice.
fn macos_voice(language: &str) -> Option<&'static str> {
    match language {
        "id" => Some("Damayanti"),
        "en" => Some("Samantha"),
        _ => None,
    }
}

/// Speech engines to try, in order, for the current platform.
pub fn speech_commands(locale: &str, text: &str) -> Vec<SpeechCommand> {
    let language = language_of(locale);
    if cfg!(target_os = "macos") {
        let args = match macos_voice(language) {
            Some(voice) => vec!["-v".to_string(), voice.to_string()],
            None => Vec::new(),
        };
        vec![SpeechCommand::with_text_arg("say", args, text)]
    } else if cfg!(target_os = "windows") {
        let script = format!(
            "Add-Type -AssemblyName System.Speech; \
             $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
             try {{ $s.SelectVoiceByHints('NotSet', 'NotSet', 0, [Globalization.CultureInfo]'{locale}') }} catch {{}}; \
             $s.Speak([Console]::In.ReadToEnd())"
        );
        vec![SpeechCommand {
            program: "powershell".to_string(),
            args: vec!["-NoProfile".to_string(), "-Command".to_string(), script],
            text_on_stdin: true,
        }]
    } else {
        vec![
            SpeechCommand::with_text_arg(
                "spd-say",
                vec!["-l".to_string(), language.to_string()],
                text,
            ),
            SpeechCommand::with_text_arg(
                "espeak-ng",
                vec!["-v".to_string(), language.to_string()],
                text,
            ),
            SpeechCommand::with_text_arg(
                "espeak",
                vec!["-v".to_string(), language.to_string()],
                text,
            ),
        ]
    }
}

/// Starts the first engine that launches. The child is reaped on a detached thread
/// whose handle is returned.
fn launch(
    candidates: Vec<SpeechCommand>,
    text: &str,
) -> Result<thread::JoinHandle<io::Result<ExitStatus>>> {
    for candidate in candidates {
        let mut command = Command::new(&candidate.program);
        command
            .args(&candidate.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if candidate.text_on_stdin {
            command.stdin(Stdio::piped());
        } else {
            command.stdin(Stdio::null());
        }
        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                tracing::debug!(engine = %candidate.program, "speech engine unavailable: {err}");
                continue;
            }
        };

        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        tracing::debug!(engine = %candidate.program, "speech started");
        let reaper = thread::spawn(move || child.wait());
        written.context("failed to pass text to speech engine")?;
        return Ok(reaper);
    }
    bail!("no speech engine available")
}

/// Starts speaking `text` in the background. Errors when no speech engine could be launched.
pub fn speak(text: &str, locale: &str) -> Result<()> {
    launch(speech_commands(locale, text), text)
        .with_context(|| format!("cannot speak with locale {locale}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_subtag_is_extracted() {
        assert_eq!(language_of("id-ID"), "id");
        assert_eq!(language_of("en_US"), "en");
        assert_eq!(language_of("id"), "id");
    }

    #[test]
    fn indonesian_locale_selects_an_indonesian_mac_voice() {
        assert_eq!(macos_voice("id"), Some("Damayanti"));
        assert_eq!(macos_voice("xx"), None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_engines_get_language_and_text_after_separator() {
        let commands = speech_commands("id-ID", "- Buka aplikasi");
        assert_eq!(commands[0].program, "spd-say");
        assert_eq!(commands[0].args, vec!["-l", "id", "--", "- Buka aplikasi"]);
        for command in &commands {
            let n = command.args.len();
            assert_eq!(command.args[n - 2], "--");
            assert_eq!(command.args[n - 1], "- Buka aplikasi");
        }
    }

    #[cfg(unix)]
    #[test]
    fn launched_engine_is_reaped() {
        let engine = |program: &str| SpeechCommand {
            program: program.to_string(),
            args: vec!["-c".to_string(), "exit 0".to_string()],
            text_on_stdin: false,
        };

        let reaper = launch(
            vec![engine("buddytext-missing-engine"), engine("sh")],
            "halo",
        )
        .expect("fallback engine launches");
        let status = reaper
            .join()
            .expect("reaper thread")
            .expect("wait on child");
        assert!(status.success());
    }

    #[test]
    fn no_engine_is_an_error() {
        let missing = SpeechCommand {
            program: "buddytext-missing-engine".to_string(),
            args: Vec::new(),
            text_on_stdin: false,
        };
        assert!(launch(vec![missing], "halo").is_err());
    }
}
