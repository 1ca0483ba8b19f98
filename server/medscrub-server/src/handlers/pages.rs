//! User-facing pages.
//!
//! Four small HTML pages: an overview, a worked example, and the two
//! anonymizer forms. The forms call the JSON API from inline scripts and
//! render the before/after text; everything else is static markup.

use axum::{extract::State, response::Html};

use crate::routes::paths;
use crate::server::MedscrubServer;

/// Sample doctor's note shown on the example page.
const SAMPLE_NOTE: &str = "Patient John Doe, a 45-year-old male, complains of persistent \
headaches for the past two weeks. The patient reports no history of migraines but mentions \
recent increased work stress. No nausea or vomiting. Blood pressure today is 140/90 mmHg. \
Neurological exam is unremarkable. No signs of infection or trauma. Suspected stress-related \
tension headaches. Recommended stress management techniques and prescribed ibuprofen 400mg \
as needed. Follow-up in two weeks if symptoms persist.";

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, active: &str, body: &str) -> String {
    let nav_link = |href: &str, key: &str, label: &str| {
        let class = if key == active { " class=\"active\"" } else { "" };
        format!("<a href=\"{}\"{}>{}</a>", href, class, label)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - MedScrub</title>
<style>
  body {{ font-family: system-ui, sans-serif; margin: 0; color: #222; }}
  nav {{ background: #f0f2f6; padding: 12px 24px; }}
  nav a {{ margin-right: 18px; color: #333; text-decoration: none; font-size: 17px; }}
  nav a.active {{ color: #2E7D32; font-weight: 600; }}
  main {{ max-width: 860px; margin: 0 auto; padding: 24px; }}
  textarea {{ width: 100%; font-family: inherit; font-size: 15px; padding: 8px; }}
  button {{ background: #2E7D32; color: white; border: none; padding: 10px 18px;
            font-size: 16px; border-radius: 4px; cursor: pointer; }}
  .warning {{ color: #b45309; }}
  .error {{ color: #b91c1c; }}
</style>
</head>
<body>
<nav>
  {home}
  {example}
  {audio}
  {text}
</nav>
<main>
{body}
</main>
</body>
</html>"#,
        title = title,
        home = nav_link(paths::pages::HOW_IT_WORKS, "how", "How It Works"),
        example = nav_link(paths::pages::EXAMPLE, "example", "Example"),
        audio = nav_link(paths::pages::AUDIO, "audio", "Audio Anonymizer"),
        text = nav_link(paths::pages::TEXT, "text", "Text Anonymizer"),
        body = body,
    )
}

/// Overview page
pub async fn how_it_works() -> Html<String> {
    let body = r#"
<h1>How It Works</h1>
<p>MedScrub helps healthcare professionals, medical students, and healthtech
innovators anonymize sensitive patient data in medical notes.</p>
<p><strong>Head to the Audio Anonymizer page to start, or check the Example
page to see a worked note.</strong></p>
<h2>Anonymization process</h2>
<ul>
  <li><strong>Speech-to-Text:</strong> converts audio notes into text via the
  configured transcription provider.</li>
  <li><strong>Entity Recognition:</strong> detects sensitive information and
  replaces it with generic placeholders such as <code>[PERSON]</code> and
  <code>[DATE]</code>.</li>
</ul>
<h2>Who benefits from this?</h2>
<ul>
  <li><strong>Doctors &amp; Nurses:</strong> secure patient data.</li>
  <li><strong>Medical Students:</strong> learn the importance of data anonymization.</li>
  <li><strong>HealthTech Innovators:</strong> build solutions that respect privacy
  regulations like HIPAA.</li>
</ul>
"#;
    Html(layout("How It Works", "how", body))
}

/// Example page: the sample note run through the live anonymizer.
pub async fn example(State(server): State<MedscrubServer>) -> Html<String> {
    let result = server.anonymizer.anonymize(SAMPLE_NOTE);

    let body = format!(
        r#"
<h1>Example: Anonymized Medical Note</h1>
<p>Below is a typical medical note. The tool anonymizes sensitive data such
as the patient's name and visit dates.</p>
<h2>Original Doctor's Note</h2>
<textarea rows="8" readonly>{original}</textarea>
<h2>Anonymized Doctor's Note</h2>
<textarea rows="8" readonly>{anonymized}</textarea>
"#,
        original = escape_html(SAMPLE_NOTE),
        anonymized = escape_html(&result.text),
    );
    Html(layout("Example", "example", &body))
}

/// Audio upload page
pub async fn audio_anonymizer() -> Html<String> {
    let body = format!(
        r#"
<h1>Upload &amp; Anonymize Medical Notes (Audio)</h1>
<p>Upload an audio file of a doctor's note. MedScrub will transcribe it and
anonymize sensitive patient data.</p>
<form id="audio-form">
  <p><input type="file" id="audio-file" accept=".wav,.mp3,.m4a,audio/*"></p>
  <p><button type="submit">Anonymize Medical Note</button></p>
</form>
<p id="status"></p>
<div id="result" hidden>
  <h2>Transcript</h2>
  <textarea rows="6" id="transcript" readonly></textarea>
  <h2>Anonymized Transcript</h2>
  <textarea rows="8" id="anonymized" readonly></textarea>
</div>
<script>
document.getElementById('audio-form').addEventListener('submit', async (event) => {{
  event.preventDefault();
  const file = document.getElementById('audio-file').files[0];
  const status = document.getElementById('status');
  if (!file) {{
    status.textContent = 'Please choose an audio file to anonymize.';
    status.className = 'warning';
    return;
  }}
  status.textContent = 'Processing...';
  status.className = '';
  const form = new FormData();
  form.append('audio', file);
  const response = await fetch('{audio_api}', {{ method: 'POST', body: form }});
  const payload = await response.json();
  if (!response.ok) {{
    status.textContent = payload.message || 'Anonymization failed.';
    status.className = 'error';
    return;
  }}
  status.textContent = 'Anonymization complete!';
  document.getElementById('result').hidden = false;
  document.getElementById('transcript').value = payload.data.transcript;
  document.getElementById('anonymized').value = payload.data.anonymized_transcript;
}});
</script>
"#,
        audio_api = paths::anonymize::AUDIO,
    );
    Html(layout("Audio Anonymizer", "audio", &body))
}

/// Text input page
pub async fn text_anonymizer() -> Html<String> {
    let body = format!(
        r#"
<h1>Text Anonymizer</h1>
<p>You can also anonymize plain text input. Paste your medical note below.</p>
<form id="text-form">
  <p><textarea rows="8" id="note-text" placeholder="Enter your medical note text here"></textarea></p>
  <p><button type="submit">Anonymize Text</button></p>
</form>
<p id="status"></p>
<div id="result" hidden>
  <h2>Anonymized Text</h2>
  <textarea rows="8" id="anonymized" readonly></textarea>
</div>
<script>
document.getElementById('text-form').addEventListener('submit', async (event) => {{
  event.preventDefault();
  const text = document.getElementById('note-text').value;
  const status = document.getElementById('status');
  if (!text.trim()) {{
    status.textContent = 'Please enter some text to anonymize.';
    status.className = 'warning';
    return;
  }}
  status.textContent = 'Processing...';
  status.className = '';
  const response = await fetch('{text_api}', {{
    method: 'POST',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{ text }}),
  }});
  const payload = await response.json();
  if (!response.ok) {{
    status.textContent = payload.message || 'Anonymization failed.';
    status.className = 'error';
    return;
  }}
  status.textContent = '';
  document.getElementById('result').hidden = false;
  document.getElementById('anonymized').value = payload.data.anonymized_text;
}});
</script>
"#,
        text_api = paths::anonymize::TEXT,
    );
    Html(layout("Text Anonymizer", "text", &body))
}
