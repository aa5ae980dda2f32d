pub const HEADER: &str = "p-4 flex justify-between items-center z-10 backdrop-blur-sm bg-black/10";
pub const LOOT_BUTTON: &str = "relative bg-white/20 p-2 rounded-full hover:bg-white/30 transition-all active:scale-95";
pub const BADGE: &str = "absolute -top-1 -right-1 bg-red-500 text-white text-xs font-bold w-5 h-5 flex items-center justify-center rounded-full animate-bounce";
pub const WHEEL_TITLE: &str = "text-4xl md:text-6xl font-black text-center drop-shadow-lg tracking-wider text-transparent bg-clip-text bg-gradient-to-b from-white to-white/70";
pub const BUTTON_ICON: &str = "bg-white/20 p-2 rounded-full opacity-70 hover:opacity-100 transition-opacity";
pub const ADMIN_PANEL: &str = "bg-black/80 p-4 rounded mt-2 text-xs backdrop-blur-md border border-white/10";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-end sm:items-center justify-center bg-black/80 backdrop-blur-sm p-4";
pub const MODAL_CARD: &str = "bg-white text-gray-900 w-full max-w-md rounded-2xl overflow-hidden shadow-2xl";
pub const LOOT_ROW: &str = "flex items-center justify-between bg-gray-50 p-3 rounded-lg border border-gray-200 shadow-sm";
pub const USE_BUTTON: &str = "px-3 py-1 bg-green-500 text-white text-sm font-bold rounded-md hover:bg-green-600 active:scale-95 transition-all";
pub const ALERT_ERROR: &str = "bg-red-50 border border-red-200 rounded-lg p-4 text-red-700";
pub const COUNT_CHIP: &str = "px-2 py-1 bg-indigo-50 text-indigo-700 text-xs font-bold rounded-full";
