use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controllers::app::Alert;
use crate::models::image::{ImagePicker, Permission};
use crate::models::{FeedStore, ImageRef, PostDetail};
use crate::views::widgets::{ListCursor, TextInput};

const PAGE: usize = 5;

/// "Create Post" dialog
#[derive(Debug, Default)]
pub struct ComposeForm {
    pub text: TextInput,
    pub image: Option<ImageRef>,
}

/// Open post with its comment box
#[derive(Debug)]
pub struct DetailView {
    pub detail: PostDetail,
    pub comment: TextInput,
    pub scroll: u16,
}

#[derive(Debug)]
pub struct PickerView {
    pub images: Vec<ImageRef>,
    pub cursor: ListCursor,
}

#[derive(Debug, Default)]
pub struct CommunityScreen {
    pub cursor: ListCursor,
    pub compose: Option<ComposeForm>,
    pub detail: Option<DetailView>,
    pub picker: Option<PickerView>,
}

impl CommunityScreen {
    pub fn new(feed: &FeedStore) -> Self {
        Self {
            cursor: ListCursor::with_len(feed.len()),
            ..Default::default()
        }
    }

    /// A dialog is open and owns the keyboard.
    pub fn has_modal(&self) -> bool {
        self.compose.is_some() || self.detail.is_some()
    }

    pub fn selected_post_id(&self, feed: &FeedStore) -> Option<String> {
        self.cursor
            .selected()
            .and_then(|i| feed.posts().get(i))
            .map(|post| post.id.clone())
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        feed: &mut FeedStore,
        picker: &mut dyn ImagePicker,
    ) -> Option<Alert> {
        if self.detail.is_some() {
            return self.handle_detail_key(key, feed);
        }
        if self.compose.is_some() {
            return self.handle_compose_key(key, feed, picker);
        }

        let len = feed.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.cursor.next(len),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.previous(len),
            KeyCode::Char('g') | KeyCode::Home => self.cursor.first(len),
            KeyCode::Char('G') | KeyCode::End => self.cursor.last(len),
            KeyCode::PageDown => self.cursor.jump_down(PAGE, len),
            KeyCode::PageUp => self.cursor.jump_up(PAGE, len),
            KeyCode::Char('+') | KeyCode::Char('u') => {
                if let Some(id) = self.selected_post_id(feed) {
                    feed.upvote(&id);
                }
            }
            KeyCode::Char('-') | KeyCode::Char('d') => {
                if let Some(id) = self.selected_post_id(feed) {
                    feed.downvote(&id);
                }
            }
            KeyCode::Char('n') => self.compose = Some(ComposeForm::default()),
            KeyCode::Enter => {
                if let Some(id) = self.selected_post_id(feed) {
                    self.open_detail(&id, feed);
                }
            }
            _ => {}
        }
        None
    }

    pub fn open_detail(&mut self, post_id: &str, feed: &FeedStore) {
        match feed.open_detail(post_id) {
            Some(detail) => {
                self.detail = Some(DetailView {
                    detail,
                    comment: TextInput::default(),
                    scroll: 0,
                })
            }
            None => log::warn!("Tried to open missing post {}", post_id),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent, feed: &mut FeedStore) -> Option<Alert> {
        let view = self.detail.as_mut()?;
        match key.code {
            KeyCode::Esc => self.detail = None,
            KeyCode::Up => view.scroll = view.scroll.saturating_sub(1),
            KeyCode::Down => view.scroll = view.scroll.saturating_add(1),
            KeyCode::Enter => match feed.add_comment(&mut view.detail, view.comment.value()) {
                Ok(_) => view.comment.clear(),
                Err(e) => return Some(Alert::from(e)),
            },
            _ => {
                view.comment.handle_key(&key);
            }
        }
        None
    }

    fn handle_compose_key(
        &mut self,
        key: KeyEvent,
        feed: &mut FeedStore,
        picker: &mut dyn ImagePicker,
    ) -> Option<Alert> {
        if self.picker.is_some() {
            self.handle_picker_key(key);
            return None;
        }

        let form = self.compose.as_mut()?;
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('u') {
            return self.pick_image(picker);
        }
        match key.code {
            // closing discards the draft
            KeyCode::Esc => self.compose = None,
            KeyCode::Enter => match feed.create_post(form.text.value(), form.image.clone()) {
                Ok(_) => {
                    self.compose = None;
                    self.cursor.clamp(feed.len());
                    self.cursor.first(feed.len());
                }
                Err(e) => return Some(Alert::from(e)),
            },
            _ => {
                form.text.handle_key(&key);
            }
        }
        None
    }

    fn pick_image(&mut self, picker: &mut dyn ImagePicker) -> Option<Alert> {
        if picker.request_permission() == Permission::Denied {
            return Some(Alert::new(
                "Permission Denied",
                "Camera roll permissions are needed to select an image.",
            ));
        }
        match picker.list_images() {
            Ok(images) => {
                let cursor = ListCursor::with_len(images.len());
                self.picker = Some(PickerView { images, cursor });
            }
            Err(e) => log::error!("Error picking image: {}", e),
        }
        None
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(view) = self.picker.as_mut() else {
            return;
        };
        let len = view.images.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => view.cursor.next(len),
            KeyCode::Up | KeyCode::Char('k') => view.cursor.previous(len),
            KeyCode::Esc => self.picker = None,
            KeyCode::Enter => {
                let chosen = view.cursor.selected().and_then(|i| view.images.get(i)).cloned();
                if let Some(image) = chosen {
                    if let Some(form) = self.compose.as_mut() {
                        form.image = Some(image);
                    }
                    self.picker = None;
                }
            }
            _ => {}
        }
    }
}
