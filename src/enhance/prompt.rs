//! Enhanced-prompt template assembly. Pure string interpolation; assembly
//! never fails for well-formed input.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::enhance::classify::{PromptCategory, classify_prompt};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPrompt {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(rename = "improvedByAI")]
    pub improved_by_ai: bool,
    pub ai_enhance_date: DateTime<Utc>,
}

pub fn enhance_prompt(title: &str, description: &str, content: &str) -> EnhancedPrompt {
    match classify_prompt(title, content) {
        PromptCategory::CodeGeneration => enhance_code_generation(title, description, content),
        PromptCategory::Debugging => enhance_debugging(title, description, content),
        PromptCategory::Generic => enhance_generic(title, description, content),
    }
}

fn enhance_code_generation(title: &str, description: &str, content: &str) -> EnhancedPrompt {
    EnhancedPrompt {
        title: format!("Code Generation Expert: {title}"),
        description: format!(
            "{description}\n\nAI Enhancement: This prompt has been optimized for precise code \
             generation with comprehensive specifications, error handling, and best practices \
             integration. The enhanced version ensures consistent, production-ready code output."
        ),
        content: format!(
            "You are a senior software engineer with expertise in multiple programming languages \
             and frameworks. Your task is to generate high-quality, production-ready code based \
             on the following specifications.

## Context & Requirements
{description}

## Specific Instructions
{content}

## Code Generation Guidelines
Please follow these standards when generating code:

### Structure & Organization
- Use clear, descriptive variable and function names
- Follow language-specific naming conventions (camelCase, snake_case, etc.)
- Organize code with proper indentation and spacing
- Include meaningful comments for complex logic

### Error Handling & Validation
- Implement comprehensive error handling
- Add input validation for all parameters
- Include edge case handling
- Provide meaningful error messages

### Performance & Best Practices
- Write efficient, optimized code
- Follow SOLID principles and design patterns
- Use appropriate data structures
- Implement proper memory management

### Documentation & Testing
- Include doc comments for functions and classes
- Add inline comments for complex algorithms
- Suggest unit test cases for the generated code
- Provide usage examples

### Additional Requirements
- Specify any dependencies or imports needed
- Include type annotations where the language supports them
- Follow security best practices
- Make code modular and reusable

## Expected Output Format
1. **Main Code**: Complete, functional implementation
2. **Dependencies**: List of required packages/modules
3. **Usage Example**: How to use the generated code
4. **Test Cases**: Suggested test scenarios
5. **Notes**: Any important considerations or limitations

Generate clean, well-documented, production-ready code that adheres to industry standards and \
best practices."
        ),
        improved_by_ai: true,
        ai_enhance_date: Utc::now(),
    }
}

fn enhance_debugging(title: &str, description: &str, content: &str) -> EnhancedPrompt {
    EnhancedPrompt {
        title: format!("Debug & Troubleshooting Expert: {title}"),
        description: format!(
            "{description}\n\nAI Enhancement: This prompt has been optimized for systematic \
             debugging with comprehensive analysis, root cause identification, and solution \
             strategies."
        ),
        content: format!(
            "You are a debugging expert with deep knowledge of software systems, error patterns, \
             and troubleshooting methodologies. Help identify and resolve the following issue.

## Problem Context
{description}

## Issue Details
{content}

## Systematic Debugging Approach

### Issue Analysis
1. **Symptom Identification**: Clearly describe the observed behavior
2. **Expected vs Actual**: Compare expected and actual outcomes
3. **Reproduction Steps**: Outline steps to consistently reproduce the issue
4. **Environment Details**: Consider system, browser, version differences

### Root Cause Investigation
- **Error Message Analysis**: Decode error messages and stack traces
- **Data Flow Analysis**: Trace data flow through the system
- **State Inspection**: Check variable states and object properties
- **Timeline Analysis**: Understand when and why the issue occurs

### Common Issue Patterns
Check for these frequent causes:
- **Null/Undefined References**: Missing null checks
- **Async/Await Issues**: Promise handling problems
- **Scope Problems**: Variable accessibility issues
- **Type Mismatches**: Data type conversion errors
- **Race Conditions**: Timing-related bugs
- **Memory Leaks**: Unreleased resources

### Solution Development
1. **Immediate Fix**: Quick resolution for urgent issues
2. **Proper Solution**: Long-term, maintainable fix
3. **Prevention**: How to avoid similar issues in the future
4. **Testing Strategy**: Verify the fix works correctly

## Expected Output Format
- **Root Cause**: Primary cause of the issue
- **Step-by-Step Fix**: Detailed resolution steps
- **Code Changes**: Specific code modifications needed
- **Testing Instructions**: How to verify the fix
- **Prevention Measures**: Avoid similar issues in future

Provide clear, actionable debugging guidance with specific solutions and preventive measures."
        ),
        improved_by_ai: true,
        ai_enhance_date: Utc::now(),
    }
}

fn enhance_generic(title: &str, description: &str, content: &str) -> EnhancedPrompt {
    let topic = title.to_lowercase();
    EnhancedPrompt {
        title: format!("Enhanced: {title}"),
        description: format!(
            "{description}\n\nAI Enhancement: This prompt has been optimized for better clarity, \
             specificity, and effectiveness with structured guidelines and comprehensive output \
             expectations."
        ),
        content: format!(
            "You are an expert assistant with deep knowledge in {topic}. Provide comprehensive, \
             high-quality assistance based on the following requirements.

## Task Context
{description}

## Specific Instructions
{content}

## Response Guidelines

### Accuracy & Quality
- Provide accurate, well-researched information
- Use authoritative sources and best practices
- Double-check facts and recommendations
- Acknowledge limitations or uncertainties

### Structure & Organization
- Use clear headings and subheadings
- Present information in logical sequence
- Use bullet points and numbered lists for clarity
- Include examples and practical applications

### Comprehensiveness
- Cover all aspects of the request
- Provide context and background information
- Include relevant alternatives or variations
- Address potential challenges or considerations

### Actionability
- Give specific, implementable recommendations
- Include step-by-step instructions where appropriate
- Provide concrete examples and use cases
- Suggest next steps or follow-up actions

Please ensure your response is comprehensive, well-structured, and directly addresses all \
aspects of the request with practical, actionable guidance."
        ),
        improved_by_ai: true,
        ai_enhance_date: Utc::now(),
    }
}
