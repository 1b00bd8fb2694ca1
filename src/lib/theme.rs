//! Shared Tailwind class constants so forms and navigation stay visually
//! consistent across routes.

pub struct Theme;

impl Theme {
    /// Standard text input used by the sign-in, sign-up, and resend forms.
    pub const INPUT: &'static str = "bg-stone-50 border border-stone-300 text-stone-900 text-sm rounded-lg focus:ring-amber-600 focus:border-amber-600 block w-full p-2.5 dark:bg-stone-800 dark:border-stone-600 dark:placeholder-stone-400 dark:text-white";

    /// Label paired with `INPUT`.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-stone-900 dark:text-white";

    /// Header navigation link.
    pub const NAV_LINK: &'static str = "block py-2 px-3 text-stone-900 rounded hover:bg-stone-100 md:hover:bg-transparent md:border-0 md:hover:text-amber-700 md:p-0 dark:text-white md:dark:hover:text-amber-400 dark:hover:bg-stone-700 md:dark:hover:bg-transparent";

    /// Card container for page content blocks.
    pub const CARD: &'static str = "rounded-lg border border-stone-200 bg-white p-5 dark:border-stone-700 dark:bg-stone-800";
}
