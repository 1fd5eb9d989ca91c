use maud::{Markup, Render, html};
use std::sync::Mutex;

/// Where the original UI raised blocking `alert()` dialogs, this app renders
/// the collected notices as banners at the top of the refreshed fragment.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn failure(&self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notice board poisoned").clone()
    }

    fn push(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .expect("notice board poisoned")
            .push(Notice {
                kind,
                message: message.to_string(),
            });
    }
}

impl Notifier for NoticeBoard {
    fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message);
    }

    fn failure(&self, message: &str) {
        self.push(NoticeKind::Failure, message);
    }
}

impl Render for NoticeBoard {
    fn render(&self) -> Markup {
        html! {
            @for notice in self.notices() {
                @match notice.kind {
                    NoticeKind::Success => {
                        div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded relative mb-4" role="alert" {
                            span {(notice.message)}
                        }
                    }
                    NoticeKind::Failure => {
                        div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                            span {(notice.message)}
                        }
                    }
                }
            }
        }
    }
}
