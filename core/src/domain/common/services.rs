/// Aggregate service carrying every repository the domain services need.
/// Per-domain service traits are implemented on this type in their own
/// modules.
#[derive(Debug, Clone)]
pub struct Service<U, M, MH, I, F, A, H, S> {
    pub(crate) user_repository: U,
    pub(crate) menu_repository: M,
    pub(crate) history_repository: MH,
    pub(crate) inventory_repository: I,
    pub(crate) feedback_repository: F,
    pub(crate) announcement_repository: A,
    pub(crate) hasher_repository: H,
    pub(crate) selection_storage: S,
}

impl<U, M, MH, I, F, A, H, S> Service<U, M, MH, I, F, A, H, S> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        menu_repository: M,
        history_repository: MH,
        inventory_repository: I,
        feedback_repository: F,
        announcement_repository: A,
        hasher_repository: H,
        selection_storage: S,
    ) -> Self {
        Self {
            user_repository,
            menu_repository,
            history_repository,
            inventory_repository,
            feedback_repository,
            announcement_repository,
            hasher_repository,
            selection_storage,
        }
    }
}
