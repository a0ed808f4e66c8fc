//! Menu item narration.
//!
//! An uploaded clip always wins; without one the voice description is read
//! out by the browser's speech synthesizer; with neither the item is silent.

use leptos::html::Audio;
use leptos::logging::{log, warn};
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::SpeechSynthesisUtterance;

use crate::config::{file_url, SPEECH_RATE};
use crate::models::menu_item::MenuItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VoiceSource {
    /// URL of a recorded clip.
    Clip(String),
    /// Text for speech synthesis.
    Speech(String),
    Silent,
}

impl VoiceSource {
    pub fn resolve(clip_url: Option<String>, description: Option<&str>) -> Self {
        if let Some(url) = clip_url.filter(|u| !u.trim().is_empty()) {
            return VoiceSource::Clip(url);
        }
        match description.map(str::trim).filter(|d| !d.is_empty()) {
            Some(text) => VoiceSource::Speech(text.to_string()),
            None => VoiceSource::Silent,
        }
    }

    pub fn for_item(item: &MenuItem) -> Self {
        Self::resolve(file_url(item.voice_file()), item.voice_description())
    }

    /// Source for the admin preview button: a freshly picked clip (object URL)
    /// beats the saved clip, which beats the description being typed.
    pub fn for_preview(staged_clip: Option<String>, saved_clip: Option<&str>, description: &str) -> Self {
        let clip = staged_clip.or_else(|| file_url(saved_clip));
        Self::resolve(clip, Some(description))
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, VoiceSource::Silent)
    }
}

/// Plays narration through one `<audio>` element or the speech synthesizer,
/// never both at once.
///
/// Every start or stop bumps `generation`; late callbacks from a narration
/// that was already replaced carry an older ticket and are ignored.
#[derive(Clone, Copy)]
pub struct VoicePlayer {
    audio: NodeRef<Audio>,
    playing: RwSignal<bool>,
    generation: StoredValue<u64>,
}

impl VoicePlayer {
    pub fn new() -> Self {
        Self {
            audio: create_node_ref::<Audio>(),
            playing: create_rw_signal(false),
            generation: store_value(0),
        }
    }

    /// Bind to the page's `<audio>` element.
    pub fn node_ref(&self) -> NodeRef<Audio> {
        self.audio
    }

    pub fn is_playing(&self) -> Signal<bool> {
        self.playing.into()
    }

    /// Hook for the `<audio>` element's `ended` event.
    pub fn finished(&self) {
        self.playing.set(false);
    }

    pub fn play(&self, source: &VoiceSource) {
        let ticket = self.halt();
        match source {
            VoiceSource::Clip(url) => self.play_clip(url, ticket),
            VoiceSource::Speech(text) => self.speak(text, ticket),
            VoiceSource::Silent => {}
        }
    }

    pub fn toggle(&self, source: &VoiceSource) {
        if self.playing.get_untracked() {
            self.stop();
        } else {
            self.play(source);
        }
    }

    pub fn stop(&self) {
        self.halt();
    }

    /// Stops whatever is playing and returns the ticket for what comes next.
    fn halt(&self) -> u64 {
        let ticket = self.advance();
        if let Some(audio) = self.audio.get_untracked() {
            let _ = audio.pause();
            audio.set_current_time(0.0);
        }
        if let Some(synth) = speech_synthesis() {
            synth.cancel();
        }
        let _ = self.playing.try_set(false);
        ticket
    }

    fn advance(&self) -> u64 {
        self.generation
            .try_update_value(|g| {
                *g = g.wrapping_add(1);
                *g
            })
            .unwrap_or_default()
    }

    /// Marks narration `ticket` as finished, unless a newer one has started.
    fn settle(&self, ticket: u64) {
        if self.generation.try_get_value() == Some(ticket) {
            let _ = self.playing.try_set(false);
        }
    }

    fn play_clip(&self, url: &str, ticket: u64) {
        let Some(audio) = self.audio.get_untracked() else {
            warn!("[VOICE] No audio element mounted");
            return;
        };
        audio.set_src(url);
        match audio.play() {
            Ok(promise) => {
                self.playing.set(true);
                let player = *self;
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        warn!("[VOICE] Audio playback interrupted: {:?}", e);
                        player.settle(ticket);
                    }
                });
            }
            Err(e) => warn!("[VOICE] Audio playback failed: {:?}", e),
        }
    }

    fn speak(&self, text: &str, ticket: u64) {
        let Some(synth) = speech_synthesis() else {
            warn!("[VOICE] Speech synthesis unavailable");
            return;
        };
        let utterance = match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(u) => u,
            Err(e) => {
                warn!("[VOICE] Could not build utterance: {:?}", e);
                return;
            }
        };
        utterance.set_rate(SPEECH_RATE);
        let player = *self;
        let on_end: js_sys::Function = Closure::once_into_js(move || player.settle(ticket))
        .unchecked_into();
        utterance.set_onend(Some(&on_end));
        synth.speak(&utterance);
        self.playing.set(true);
        log!("[VOICE] Speaking {} chars", text.len());
    }
}

impl Default for VoicePlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn speech_synthesis() -> Option<web_sys::SpeechSynthesis> {
    if cfg!(not(target_arch = "wasm32")) {
        return None;
    }
    web_sys::window()?.speech_synthesis().ok()
}
