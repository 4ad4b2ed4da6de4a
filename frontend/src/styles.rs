pub const CARD: &str = "bg-slate-900/70 border border-slate-700 rounded-2xl shadow-xl backdrop-blur-sm p-6 sm:p-8";
pub const TITLE: &str = "text-4xl font-bold text-center bg-clip-text text-transparent bg-gradient-to-r from-emerald-300 to-sky-400";
pub const STATUS_TEXT: &str = "mt-6 text-center text-sm text-slate-300 min-h-[1.5rem]";
pub const SPIN_BUTTON: &str = "w-full max-w-[300px] inline-flex items-center justify-center px-8 py-4 rounded-full font-bold text-lg text-white bg-gradient-to-r from-emerald-500 to-sky-600 hover:from-emerald-600 hover:to-sky-700 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const REEL: &str = "reel relative flex flex-col items-center gap-2 bg-slate-800/80 border border-slate-600 rounded-xl px-6 py-5 w-40 sm:w-48";
pub const REEL_LABEL: &str = "text-xs uppercase tracking-widest text-slate-400";
pub const REEL_VALUE: &str = "reel-value text-xl font-bold text-center min-h-[3.5rem] flex items-center justify-center";
pub const REEL_HANDLE: &str = "text-2xl leading-none text-amber-400 hover:text-amber-300 cursor-pointer select-none";
pub const BADGE_READY: &str = "mx-auto w-fit mb-6 px-4 py-1.5 rounded-full text-xs font-medium bg-emerald-900/50 border border-emerald-600 text-emerald-300";
pub const BADGE_UNAVAILABLE: &str = "mx-auto w-fit mb-6 px-4 py-1.5 rounded-full text-xs font-medium bg-amber-900/40 border border-amber-600 text-amber-300";
pub const POSTER: &str = "mt-4 w-full rounded-xl border border-slate-700 shadow-lg";
