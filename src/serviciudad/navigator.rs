use super::route::Page;
use tracing::info;

/// Host-side effects of the gate: page redirects and notices shown to the user.
pub trait Navigator {
    fn navigate(&mut self, to: Page);

    fn notify(&mut self, message: &str) {
        info!("{}", message);
    }
}

/// Keeps the current page and every redirect and notice it receives.
#[derive(Debug, Clone)]
pub struct PageHost {
    current: Page,
    pub redirects: Vec<Page>,
    pub notices: Vec<String>,
}

impl PageHost {
    #[must_use]
    pub fn new(current: Page) -> Self {
        Self {
            current,
            redirects: Vec::new(),
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn current(&self) -> Page {
        self.current
    }
}

impl Navigator for PageHost {
    fn navigate(&mut self, to: Page) {
        info!("redirecting to {}", to.path());
        self.current = to;
        self.redirects.push(to);
    }

    fn notify(&mut self, message: &str) {
        info!("{}", message);
        self.notices.push(message.to_string());
    }
}
