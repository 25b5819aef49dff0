//! User-facing texts of the panel.

pub const LOADING: &str = "Carregando...";
pub const EMPTY_LIST: &str = "Nenhum serviço cadastrado.";
pub const LOAD_FAILED: &str = "Erro ao carregar serviços.";
pub const NO_IMAGES: &str = "Sem imagens";

pub const INVALID_FIELDS: &str = "Preencha todos os campos corretamente.";

pub const CREATED: &str = "Serviço adicionado com sucesso!";
pub const CREATE_FAILED: &str = "Erro ao adicionar serviço.";

pub const UPDATED: &str = "Serviço atualizado com sucesso!";
pub const UPDATE_FAILED: &str = "Erro ao atualizar serviço.";

pub const CONFIRM_DELETE: &str = "Tem certeza que deseja excluir este serviço?";
pub const DELETED: &str = "Serviço excluído com sucesso!";
pub const DELETE_FAILED: &str = "Erro ao excluir serviço.";

/// Alert shown when a selected file cannot be read.
pub fn unreadable_file(path: &std::path::Path) -> String {
    format!("Não foi possível ler o arquivo {}.", path.display())
}
