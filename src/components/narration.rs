use leptos::*;

use crate::voice::VoicePlayer;

/// Shares one player across the app so only one item narrates at a time.
pub fn provide_voice_player() -> VoicePlayer {
    let player = VoicePlayer::new();
    provide_context(player);
    player
}

pub fn use_voice_player() -> VoicePlayer {
    use_context::<VoicePlayer>().unwrap_or_else(provide_voice_player)
}

/// The hidden `<audio>` element backing the shared player.
#[component]
pub fn NarrationAudio(player: VoicePlayer) -> impl IntoView {
    view! {
        <audio
            class="narration-audio"
            preload="none"
            node_ref=player.node_ref()
            on:ended=move |_| player.finished()
        />
    }
}
