//! Field set shared by the creation form and every service card.

use crate::catalog::{Service, ServicePayload};
use crate::utils::{parse_leading_float, parse_leading_int, split_path_list, TextInput};
use std::path::PathBuf;
use thiserror::Error;

/// Identifies one input of a [`ServiceForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Nome,
    Descricao,
    Preco,
    Duracao,
    Arquivos,
}

impl FormField {
    /// Tab order
    pub const ALL: [FormField; 5] = [
        FormField::Nome,
        FormField::Descricao,
        FormField::Preco,
        FormField::Duracao,
        FormField::Arquivos,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Nome => "Nome",
            FormField::Descricao => "Descrição",
            FormField::Preco => "Preço",
            FormField::Duracao => "Duração (min)",
            FormField::Arquivos => "Imagens",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Nome => "Nome do serviço",
            FormField::Descricao => "Descrição",
            FormField::Preco => "0.00",
            FormField::Duracao => "Duração (min)",
            FormField::Arquivos => "caminho/foto1.png, caminho/foto2.jpg",
        }
    }

    pub fn next(self) -> Option<FormField> {
        let index = Self::ALL.iter().position(|f| *f == self)?;
        Self::ALL.get(index + 1).copied()
    }

    pub fn prev(self) -> Option<FormField> {
        let index = Self::ALL.iter().position(|f| *f == self)?;
        index.checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Why a form could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is empty")]
    MissingNome,
    #[error("description is empty")]
    MissingDescricao,
    #[error("price is not a number: {0:?}")]
    InvalidPreco(String),
    #[error("duration is not a number: {0:?}")]
    InvalidDuracao(String),
}

/// Validated scalar fields of a service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceFields {
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub duracao: i64,
}

impl ServiceFields {
    pub fn into_payload(self, imagens: Vec<String>) -> ServicePayload {
        ServicePayload {
            nome: self.nome,
            descricao: self.descricao,
            preco: self.preco,
            duracao: self.duracao,
            imagens,
        }
    }
}

/// The four scalar inputs plus the file picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub nome: TextInput,
    pub descricao: TextInput,
    pub preco: TextInput,
    pub duracao: TextInput,
    /// Comma-separated paths of images to add
    pub arquivos: TextInput,
    /// Files attached as exact paths, bypassing the comma-separated field
    attached: Vec<PathBuf>,
}

impl ServiceForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill the scalar inputs from a stored service.
    pub fn from_service(service: &Service) -> Self {
        Self {
            nome: TextInput::with_text(service.nome.as_str()),
            descricao: TextInput::with_text(service.descricao.as_str()),
            preco: TextInput::with_text(service.preco.map(|p| p.to_string()).unwrap_or_default()),
            duracao: TextInput::with_text(service.duration_or_zero().to_string()),
            arquivos: TextInput::new(),
            attached: Vec::new(),
        }
    }

    pub fn field(&self, field: FormField) -> &TextInput {
        match field {
            FormField::Nome => &self.nome,
            FormField::Descricao => &self.descricao,
            FormField::Preco => &self.preco,
            FormField::Duracao => &self.duracao,
            FormField::Arquivos => &self.arquivos,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut TextInput {
        match field {
            FormField::Nome => &mut self.nome,
            FormField::Descricao => &mut self.descricao,
            FormField::Preco => &mut self.preco,
            FormField::Duracao => &mut self.duracao,
            FormField::Arquivos => &mut self.arquivos,
        }
    }

    /// Check the four scalar fields.
    ///
    /// Name and description must be non-blank; price and duration must start
    /// with a number.
    pub fn validate(&self) -> Result<ServiceFields, FieldError> {
        let nome = self.nome.text_trimmed();
        if nome.is_empty() {
            return Err(FieldError::MissingNome);
        }
        let descricao = self.descricao.text_trimmed();
        if descricao.is_empty() {
            return Err(FieldError::MissingDescricao);
        }
        let preco = parse_leading_float(self.preco.text())
            .ok_or_else(|| FieldError::InvalidPreco(self.preco.text().to_string()))?;
        let duracao = parse_leading_int(self.duracao.text())
            .ok_or_else(|| FieldError::InvalidDuracao(self.duracao.text().to_string()))?;

        Ok(ServiceFields {
            nome: nome.to_string(),
            descricao: descricao.to_string(),
            preco,
            duracao,
        })
    }

    /// Attach files by path. Unlike the picker text, paths are taken as-is,
    /// so commas and surrounding spaces in file names survive.
    pub fn set_files(&mut self, files: Vec<PathBuf>) {
        self.attached = files;
    }

    /// Files currently chosen: attached paths first, then the picker entries.
    pub fn selected_files(&self) -> Vec<PathBuf> {
        let mut files = self.attached.clone();
        files.extend(split_path_list(self.arquivos.text()));
        files
    }

    /// Clear every input, including the file picker.
    pub fn reset(&mut self) {
        for field in FormField::ALL {
            self.field_mut(field).clear();
        }
        self.attached.clear();
    }
}
