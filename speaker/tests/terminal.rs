use std::path::PathBuf;
use std::sync::Arc;

use speaker::{MemoryBlobStore, Outcome, Page, SynthesisController, Terminal};

use fake_tts::{FakeTts, Reply};

fn output_path() -> PathBuf {
    std::env::temp_dir().join(format!("speaker-{}.wav", uuid::Uuid::new_v4()))
}

fn terminal(tts: Arc<FakeTts>, page: Page, output: &PathBuf) -> Terminal {
    let controller =
        SynthesisController::bind(page, tts, Arc::new(MemoryBlobStore::new())).unwrap();
    Terminal::new(controller, output.clone())
}

#[tokio::test]
async fn say_writes_audio_file() {
    let output = output_path();
    let tts = Arc::new(FakeTts::new(Reply::Audio(b"RIFFwav")));
    let term = terminal(tts, Page::standard(), &output);
    let mut out = Vec::new();

    let outcome = term.say("Hello world", &mut out).await.unwrap();

    assert!(matches!(outcome, Outcome::Success(_)));
    assert_eq!(std::fs::read(&output).unwrap(), b"RIFFwav");
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("Generating..."), "{printed}");
    assert!(printed.contains("audio ready: blob:"), "{printed}");
    std::fs::remove_file(&output).unwrap();
}

#[tokio::test]
async fn say_reports_server_detail() {
    let output = output_path();
    let tts = Arc::new(FakeTts::new(Reply::Status(500, "Model overloaded")));
    let term = terminal(tts, Page::standard(), &output);
    let mut out = Vec::new();

    let outcome = term.say("Test", &mut out).await.unwrap();

    assert_eq!(outcome.message(), Some("Model overloaded"));
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("error: Model overloaded"), "{printed}");
    assert!(!output.exists());
}

#[tokio::test]
async fn session_accumulates_lines_and_submits_on_blank() {
    let output = output_path();
    let tts = Arc::new(FakeTts::new(Reply::Audio(b"wav")));
    let page = Page::with_presets(vec!["calm".into()]);
    let term = terminal(tts.clone(), page, &output);
    let input: &[u8] = b"/preset calm\nfirst line\nsecond line\n\n/quit\nignored\n";
    let mut out = Vec::new();

    term.run(input, &mut out).await.unwrap();

    let seen = tts.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].text(), "first line\nsecond line");
    assert_eq!(seen[0].voice_preset(), Some("calm"));
    assert_eq!(term.controller().snapshot().text_input.value, "");
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("preset: calm"), "{printed}");
    std::fs::remove_file(&output).unwrap();
}

#[tokio::test]
async fn session_shows_validation_error() {
    let output = output_path();
    let tts = Arc::new(FakeTts::new(Reply::Audio(b"wav")));
    let term = terminal(tts.clone(), Page::standard(), &output);
    let input: &[u8] = b"/say\n/preset calm\n";
    let mut out = Vec::new();

    term.run(input, &mut out).await.unwrap();

    assert_eq!(tts.calls(), 0);
    let printed = String::from_utf8(out).unwrap();
    assert!(
        printed.contains("error: Please enter some text to synthesize."),
        "{printed}"
    );
    assert!(printed.contains("voice presets are not enabled"), "{printed}");
}
