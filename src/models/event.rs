use super::notification::{NotificationDraft, NotificationKind};

/// A domain action that produces a notification for one recipient.
///
/// The enumeration is closed: every user-facing action the portal can take
/// (likes, replies, evaluations, moderation decisions) has its own variant
/// carrying exactly the parameters its message template needs. There is no
/// "unknown event" branch anywhere downstream.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationEvent {
    CommentReply {
        recipient_id: String,
        actor_name: String,
        post_title: String,
        post_id: String,
    },
    PostReply {
        recipient_id: String,
        actor_name: String,
        post_title: String,
        post_id: String,
    },
    PostLike {
        recipient_id: String,
        actor_name: String,
        post_title: String,
        post_id: String,
    },
    ProjectLike {
        recipient_id: String,
        actor_name: String,
        project_title: String,
        project_id: String,
    },
    CommentLike {
        recipient_id: String,
        actor_name: String,
        post_title: String,
        post_id: String,
    },
    ProjectEvaluation {
        recipient_id: String,
        evaluator_name: String,
        project_title: String,
        grade: String,
        project_id: String,
    },
    PostDeleted {
        recipient_id: String,
        post_title: String,
    },
    ProjectDeleted {
        recipient_id: String,
        project_title: String,
    },
    AccountApproved {
        recipient_id: String,
    },
    AccountBanned {
        recipient_id: String,
    },
    NewProject {
        recipient_id: String,
        author_name: String,
        project_title: String,
        project_id: String,
    },
}

impl NotificationEvent {
    pub fn recipient_id(&self) -> &str {
        match self {
            NotificationEvent::CommentReply { recipient_id, .. }
            | NotificationEvent::PostReply { recipient_id, .. }
            | NotificationEvent::PostLike { recipient_id, .. }
            | NotificationEvent::ProjectLike { recipient_id, .. }
            | NotificationEvent::CommentLike { recipient_id, .. }
            | NotificationEvent::ProjectEvaluation { recipient_id, .. }
            | NotificationEvent::PostDeleted { recipient_id, .. }
            | NotificationEvent::ProjectDeleted { recipient_id, .. }
            | NotificationEvent::AccountApproved { recipient_id }
            | NotificationEvent::AccountBanned { recipient_id }
            | NotificationEvent::NewProject { recipient_id, .. } => recipient_id,
        }
    }

    pub fn kind(&self) -> NotificationKind {
        match self {
            NotificationEvent::CommentReply { .. } => NotificationKind::CommentReply,
            NotificationEvent::PostReply { .. } => NotificationKind::PostReply,
            NotificationEvent::PostLike { .. } => NotificationKind::PostLike,
            NotificationEvent::ProjectLike { .. } => NotificationKind::ProjectLike,
            NotificationEvent::CommentLike { .. } => NotificationKind::CommentLike,
            NotificationEvent::ProjectEvaluation { .. } => NotificationKind::ProjectEvaluation,
            NotificationEvent::PostDeleted { .. } => NotificationKind::PostDeleted,
            NotificationEvent::ProjectDeleted { .. } => NotificationKind::ProjectDeleted,
            NotificationEvent::AccountApproved { .. } => NotificationKind::AccountApproved,
            NotificationEvent::AccountBanned { .. } => NotificationKind::AccountBanned,
            NotificationEvent::NewProject { .. } => NotificationKind::NewProject,
        }
    }

    /// Build the notification payload for this event.
    ///
    /// Pure: the same event always yields the same title, message and link.
    pub fn to_draft(&self) -> NotificationDraft {
        match self {
            NotificationEvent::CommentReply {
                recipient_id,
                actor_name,
                post_title,
                post_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::CommentReply,
                title: "Nouvelle réponse".to_string(),
                message: format!(
                    "{} a répondu à votre commentaire sur \"{}\"",
                    actor_name, post_title
                ),
                actor_name: Some(actor_name.clone()),
                related_id: Some(post_id.clone()),
                related_title: Some(post_title.clone()),
                link: Some(format!("/discussion/{}", post_id)),
            },
            NotificationEvent::PostReply {
                recipient_id,
                actor_name,
                post_title,
                post_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::PostReply,
                title: "Nouveau commentaire".to_string(),
                message: format!(
                    "{} a commenté votre discussion \"{}\"",
                    actor_name, post_title
                ),
                actor_name: Some(actor_name.clone()),
                related_id: Some(post_id.clone()),
                related_title: Some(post_title.clone()),
                link: Some(format!("/discussion/{}", post_id)),
            },
            NotificationEvent::PostLike {
                recipient_id,
                actor_name,
                post_title,
                post_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::PostLike,
                title: "Nouveau like".to_string(),
                message: format!("{} a aimé votre discussion \"{}\"", actor_name, post_title),
                actor_name: Some(actor_name.clone()),
                related_id: Some(post_id.clone()),
                related_title: Some(post_title.clone()),
                link: Some(format!("/discussion/{}", post_id)),
            },
            NotificationEvent::ProjectLike {
                recipient_id,
                actor_name,
                project_title,
                project_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::ProjectLike,
                title: "Nouveau like".to_string(),
                message: format!("{} a aimé votre projet \"{}\"", actor_name, project_title),
                actor_name: Some(actor_name.clone()),
                related_id: Some(project_id.clone()),
                related_title: Some(project_title.clone()),
                link: Some(format!("/project/{}", project_id)),
            },
            NotificationEvent::CommentLike {
                recipient_id,
                actor_name,
                post_title,
                post_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::CommentLike,
                title: "Nouveau like".to_string(),
                message: format!(
                    "{} a aimé votre commentaire sur \"{}\"",
                    actor_name, post_title
                ),
                actor_name: Some(actor_name.clone()),
                related_id: Some(post_id.clone()),
                related_title: Some(post_title.clone()),
                link: Some(format!("/discussion/{}", post_id)),
            },
            NotificationEvent::ProjectEvaluation {
                recipient_id,
                evaluator_name,
                project_title,
                grade,
                project_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::ProjectEvaluation,
                title: "Nouvelle évaluation".to_string(),
                message: format!(
                    "{} a évalué votre projet \"{}\" avec la note {}",
                    evaluator_name, project_title, grade
                ),
                actor_name: Some(evaluator_name.clone()),
                related_id: Some(project_id.clone()),
                related_title: Some(project_title.clone()),
                link: Some(format!("/project/{}", project_id)),
            },
            NotificationEvent::PostDeleted {
                recipient_id,
                post_title,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::PostDeleted,
                title: "Discussion supprimée".to_string(),
                message: format!(
                    "Votre discussion \"{}\" a été supprimée par un administrateur",
                    post_title
                ),
                actor_name: None,
                related_id: None,
                related_title: Some(post_title.clone()),
                link: None,
            },
            NotificationEvent::ProjectDeleted {
                recipient_id,
                project_title,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::ProjectDeleted,
                title: "Projet supprimé".to_string(),
                message: format!(
                    "Votre projet \"{}\" a été supprimé par un administrateur",
                    project_title
                ),
                actor_name: None,
                related_id: None,
                related_title: Some(project_title.clone()),
                link: Some("/projects".to_string()),
            },
            NotificationEvent::AccountApproved { recipient_id } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::AccountApproved,
                title: "Compte approuvé !".to_string(),
                message: "Votre compte a été approuvé. Vous pouvez maintenant accéder à toutes \
                          les fonctionnalités."
                    .to_string(),
                actor_name: None,
                related_id: None,
                related_title: None,
                link: None,
            },
            NotificationEvent::AccountBanned { recipient_id } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::AccountBanned,
                title: "Compte suspendu".to_string(),
                message: "Votre compte a été suspendu. Contactez un administrateur pour plus \
                          d'informations."
                    .to_string(),
                actor_name: None,
                related_id: None,
                related_title: None,
                link: None,
            },
            NotificationEvent::NewProject {
                recipient_id,
                author_name,
                project_title,
                project_id,
            } => NotificationDraft {
                user_id: recipient_id.clone(),
                kind: NotificationKind::NewProject,
                title: "Nouveau projet".to_string(),
                message: format!(
                    "{} a publié un nouveau projet : \"{}\"",
                    author_name, project_title
                ),
                actor_name: Some(author_name.clone()),
                related_id: Some(project_id.clone()),
                related_title: Some(project_title.clone()),
                link: Some(format!("/project/{}", project_id)),
            },
        }
    }
}
