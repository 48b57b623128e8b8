use super::{IssueKind, ValidationIssue};
use crate::error::{K6GenError, Result};
use crate::models::{Block, NamedValueMap, NormalBlock, Request};
use regex::Regex;
use std::collections::HashSet;

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*$";

/// Validator for declared names: identifier syntax and uniqueness
pub struct NameValidator {
    identifier: Regex,
}

impl NameValidator {
    pub fn new() -> Result<Self> {
        let identifier = Regex::new(IDENTIFIER_PATTERN).map_err(|e| {
            K6GenError::ValidationError(format!("Invalid identifier pattern: {}", e))
        })?;
        Ok(Self { identifier })
    }

    pub fn is_identifier(&self, name: &str) -> bool {
        self.identifier.is_match(name)
    }

    /// Walk the whole tree and collect every issue
    pub fn validate(&self, block: &Block) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        let mut request_names = HashSet::new();
        self.visit_block(block, &mut request_names, &mut issues);
        issues
    }

    fn visit_block<'b>(
        &self,
        block: &'b Block,
        request_names: &mut HashSet<&'b str>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        match block {
            Block::Normal(b) => self.visit_normal(b, request_names, issues),
            Block::Conditional(b) => {
                self.visit_normal(&b.then_block, request_names, issues);
                self.visit_normal(&b.else_block, request_names, issues);
            }
            Block::Loop(b) => self.visit_normal(&b.body, request_names, issues),
            Block::Raw(_) => {}
        }
    }

    fn visit_normal<'b>(
        &self,
        block: &'b NormalBlock,
        request_names: &mut HashSet<&'b str>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        self.check_declarations("constant", &block.constants, issues);
        self.check_declarations("variable", &block.variables, issues);

        for request in &block.requests {
            self.check_request(request, request_names, issues);
        }

        for nested in &block.blocks {
            self.visit_block(nested, request_names, issues);
        }
    }

    fn check_declarations(
        &self,
        kind: &str,
        declarations: &NamedValueMap,
        issues: &mut Vec<ValidationIssue>,
    ) {
        for key in declarations.keys() {
            if !self.is_identifier(key) {
                issues.push(ValidationIssue::new(
                    IssueKind::InvalidIdentifier,
                    format!("{} name '{}' is not a valid identifier", kind, key),
                ));
            }
        }
    }

    fn check_request<'b>(
        &self,
        request: &'b Request,
        request_names: &mut HashSet<&'b str>,
        issues: &mut Vec<ValidationIssue>,
    ) {
        let name = request.name();

        if !self.is_identifier(name) {
            issues.push(ValidationIssue::new(
                IssueKind::InvalidIdentifier,
                format!("request name '{}' is not a valid identifier", name),
            ));
        }

        if !request_names.insert(name) {
            issues.push(ValidationIssue::new(
                IssueKind::DuplicateRequestName,
                format!("request '{}' is declared more than once", name),
            ));
        }

        let mut check_names = HashSet::new();
        for check in request.checks() {
            if !check_names.insert(check.name.as_str()) {
                issues.push(ValidationIssue::new(
                    IssueKind::DuplicateCheckName,
                    format!("check '{}' appears twice in request '{}'", check.name, name),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Check, ConditionalBlock, HttpRequest, LoopBlock};

    #[test]
    fn test_identifiers() {
        let validator = NameValidator::new().unwrap();
        assert!(validator.is_identifier("r1"));
        assert!(validator.is_identifier("_private"));
        assert!(validator.is_identifier("$el"));
        assert!(!validator.is_identifier("1abc"));
        assert!(!validator.is_identifier("my-req"));
        assert!(!validator.is_identifier(""));
    }

    #[test]
    fn test_valid_tree_has_no_issues() {
        let validator = NameValidator::new().unwrap();
        let block = Block::Normal(
            NormalBlock::new()
                .with_constant("c", 1)
                .with_request(HttpRequest::new("r1", "GET", "https://example.com"))
                .with_block(LoopBlock {
                    header: "let i = 0; i < 2; i++".to_string(),
                    body: NormalBlock::new()
                        .with_request(HttpRequest::new("r2", "GET", "https://example.com")),
                }),
        );

        assert!(validator.validate(&block).is_empty());
    }

    #[test]
    fn test_duplicate_request_across_branches() {
        let validator = NameValidator::new().unwrap();
        let block = Block::Normal(
            NormalBlock::new()
                .with_request(HttpRequest::new("r1", "GET", "https://example.com"))
                .with_block(ConditionalBlock {
                    condition: "r1.status === 200".to_string(),
                    then_block: NormalBlock::new()
                        .with_request(HttpRequest::new("r1", "GET", "https://example.com")),
                    else_block: NormalBlock::new(),
                }),
        );

        let issues = validator.validate(&block);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::DuplicateRequestName);
    }

    #[test]
    fn test_duplicate_check_and_bad_names() {
        let validator = NameValidator::new().unwrap();
        let block = Block::Normal(
            NormalBlock::new()
                .with_variable("not-valid", 1)
                .with_request(
                    HttpRequest::new("r1", "GET", "https://example.com")
                        .with_check(Check::new("ok", "(r) => true"))
                        .with_check(Check::new("ok", "(r) => false")),
                ),
        );

        let kinds: Vec<_> = validator
            .validate(&block)
            .into_iter()
            .map(|i| i.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![IssueKind::InvalidIdentifier, IssueKind::DuplicateCheckName]
        );
    }
}
