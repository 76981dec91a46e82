//! Utility-class vocabulary for the banner.
//!
//! Classes are interpreted by the host's utility-class stylesheet engine
//! (Tailwind-compatible, with a `gold` color and a `brand` font family).

pub const ROOT: &str = "relative w-full overflow-hidden mb-6 group select-none cursor-pointer";
pub const STAGE: &str = "absolute inset-0 w-full h-full";

pub const BACKDROP: &str = "absolute inset-0 w-full h-full";
pub const IMAGE: &str = "w-full h-full object-cover pointer-events-none";
pub const IMAGE_STYLE: &str = "object-position: center top";

pub const GRADIENT_TOP: &str =
    "absolute top-0 inset-x-0 h-32 bg-gradient-to-b from-black/80 via-black/30 to-transparent z-10";
pub const GRADIENT_BOTTOM: &str =
    "absolute bottom-0 inset-x-0 h-[70%] bg-gradient-to-t from-black via-black/90 to-transparent z-10";
pub const GRADIENT_LEFT: &str =
    "absolute inset-y-0 left-0 w-1/4 bg-gradient-to-r from-black/60 to-transparent z-10";
pub const VIGNETTE: &str =
    "absolute inset-0 pointer-events-none shadow-[inset_0_0_80px_rgba(0,0,0,0.5)] z-[5]";

pub const CONTENT: &str = "absolute bottom-0 left-0 right-0 p-5 pb-10 z-20";
pub const CONTENT_INNER: &str = "max-w-xl";

pub const BADGE_ROW: &str = "flex items-center gap-2 mb-3";
pub const BADGE_TRENDING: &str = "bg-gradient-to-r from-gold via-yellow-400 to-gold text-black text-[9px] font-black px-2.5 py-1 rounded-md uppercase tracking-widest shadow-[0_0_15px_rgba(255,215,0,0.5)]";
pub const BADGE_CATEGORY: &str = "text-[9px] font-bold text-white/90 uppercase bg-white/10 backdrop-blur-md px-2.5 py-1 rounded-md border border-white/20";
pub const BADGE_QUALITY: &str = "text-[9px] font-bold text-blue-300 uppercase bg-blue-500/20 backdrop-blur-md px-2.5 py-1 rounded-md border border-blue-400/30";

pub const TITLE: &str = "text-3xl md:text-4xl font-brand leading-[1.0] mb-3 text-transparent bg-clip-text bg-gradient-to-b from-white via-white to-gray-400 drop-shadow-[0_4px_20px_rgba(255,255,255,0.3)]";

pub const META_ROW: &str = "flex items-center gap-3 mb-4 text-xs font-semibold text-gray-300 flex-wrap";
pub const META_ITEM: &str = "flex items-center gap-1";
pub const META_SEPARATOR: &str = "w-1 h-1 bg-gray-500 rounded-full";
pub const META_RATING_TEXT: &str = "text-white font-bold";
pub const META_AUDIO_TEXT: &str = "text-blue-300";

pub const DESCRIPTION: &str =
    "text-gray-300 text-xs line-clamp-2 mb-5 font-medium max-w-sm leading-relaxed opacity-85";

pub const ACTIONS: &str = "flex items-center gap-3";
pub const PLAY_BUTTON: &str = "relative overflow-hidden bg-white text-black px-6 py-2.5 rounded-lg font-black text-xs flex items-center gap-2 hover:scale-105 transition-all shadow-[0_0_25px_rgba(255,255,255,0.3)] active:scale-95 group/btn z-30";
pub const PLAY_SWEEP: &str = "absolute inset-0 bg-gradient-to-r from-transparent via-white/40 to-transparent -translate-x-full group-hover/btn:translate-x-full transition-transform duration-700";
pub const PLAY_LABEL: &str = "relative z-10";
pub const INFO_BUTTON: &str = "relative bg-white/10 backdrop-blur-md text-white px-5 py-2.5 rounded-lg font-bold text-xs flex items-center gap-2 border border-white/20 hover:bg-white/20 transition-all active:scale-95";

pub const ICON_STAR: &str = "text-gold";
pub const ICON_CLOCK: &str = "text-gray-400";
pub const ICON_MONITOR: &str = "text-blue-300";
pub const ICON_PLAY: &str = "relative z-10";

/// Fill color of the rating star.
pub const GOLD: &str = "#FFD700";

/// Inline style of the banner root.
pub fn root_style(max_height: &str) -> String {
    format!("aspect-ratio: 16/9; max-height: {}", max_height)
}
