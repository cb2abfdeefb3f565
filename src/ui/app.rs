use crate::country::CountryRecord;
use crate::loader::LoadError;
use crate::ui::directory::{DirectoryIntent, DirectoryReducer, DirectoryState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    /// Directory screen state (MVI pattern).
    directory: DirectoryState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            size: None,
            directory: DirectoryState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn directory(&self) -> &DirectoryState {
        &self.directory
    }

    /// Dispatch an intent to the directory reducer.
    pub fn dispatch(&mut self, intent: DirectoryIntent) {
        dispatch_mvi!(self, directory, DirectoryReducer, intent);
    }

    /// Feed the outcome of the startup load into the screen.
    pub fn on_load_result(&mut self, result: Result<Vec<CountryRecord>, LoadError>) {
        let intent = match result {
            Ok(records) => DirectoryIntent::Loaded { records },
            Err(err) => DirectoryIntent::Failed {
                message: err.to_string(),
            },
        };
        self.dispatch(intent);
    }
}
