use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Hungarian,
    English,
}

/// Renders one of its two labels depending on the current language signal.
#[component]
pub fn Lang<S>(hu: S, en: S) -> impl IntoView
where
    S: ToString + 'static,
{
    use Language::*;
    let lang = expect_context::<ReadSignal<Language>>();

    // must be a closure
    move || match lang.get() {
        Hungarian => hu.to_string(),
        English => en.to_string(),
    }
}
