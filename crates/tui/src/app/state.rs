use super::*;

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub wizard: Wizard,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    /// Highlighted row on the flavor, cuisine and ingredient steps.
    pub cursor: usize,
    pub recipe_scroll: u16,
    /// Wrapped rows hidden below the recipe view, measured on the last draw.
    pub recipe_max_scroll: u16,
    pub show_help: bool,
    pub notices: VecDeque<ToastNotice>,
    pub rng: StdRng,
    pub last_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            should_quit: false,
            layout: LayoutState::new(config.ui.summary_width),
            config,
            wizard: Wizard::new(),
            keybinds: Keybinds,
            cursor: 0,
            recipe_scroll: 0,
            recipe_max_scroll: 0,
            show_help: false,
            notices: VecDeque::new(),
            rng,
            last_error: None,
        }
    }
}
