use services::ResultScreen;

pub const RESULT_TIP: &str =
    "Tip: Balanced teams mix creative ignition with analytical acceleration.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub headline: String,
    pub blurb: String,
    pub profile: String,
    pub tally: String,
    pub share_text: String,
}

impl ResultVm {
    #[must_use]
    pub fn from_screen(screen: &ResultScreen) -> Self {
        Self {
            headline: screen.summary.headline.clone(),
            blurb: screen.summary.blurb.to_string(),
            profile: screen.summary.label.as_str().to_string(),
            tally: screen.summary.tally.clone(),
            share_text: screen.summary.share_text.clone(),
        }
    }
}
