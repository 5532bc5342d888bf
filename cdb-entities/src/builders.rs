pub use self::{comment_builder::*, user_builder::*};

pub mod comment_builder {

    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn created_at(mut self, at: i64) -> Self {
            self.comment.created_at = Timestamp::from_millis(at);
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.comment.created_by = Some(user_id.into());
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Comment {
        pub fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    created_at: Timestamp::now(),
                    created_by: None,
                    text: "".into(),
                },
            }
        }
    }
}

pub mod user_builder {

    use crate::{id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl User {
        pub fn build() -> UserBuild {
            UserBuild {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                },
            }
        }
    }
}
