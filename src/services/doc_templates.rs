//! 文档模板
//!
//! 定义 API 文档、函数文档、入门文档三类 Markdown 模板。
//! 模板是固定骨架，仅将用户输入插入到标题和示例位置。

/// API 文档模板
pub const API_DOC_TEMPLATE: &str = r#"# API Documentation

## Overview
This API provides a comprehensive set of endpoints for {prompt}.

## Authentication
All endpoints require an API key to be passed in the `Authorization` header.

```
Authorization: Bearer YOUR_API_KEY
```

## Endpoints

### GET /api/data
Retrieves data based on specified parameters.

**Parameters:**
- `limit` (optional): Maximum number of results (default: 10)
- `offset` (optional): Number of results to skip (default: 0)
- `sort` (optional): Sort order (asc/desc)

**Response:**
```json
{
  "success": true,
  "data": [],
  "total": 100
}
```

### POST /api/create
Creates a new resource.

**Body:**
```json
{
  "name": "string",
  "description": "string"
}
```

## Error Handling
All errors follow this format:
```json
{
  "success": false,
  "error": "Error message",
  "code": "ERROR_CODE"
}
```

## Rate Limiting
API requests are limited to 1000 requests per hour per API key."#;

/// 函数文档模板
pub const FUNCTION_DOC_TEMPLATE: &str = r#"# Function Documentation

## Overview
Documentation for {prompt}.

## Syntax
```javascript
function {fn_name}(param1, param2) {
  // Implementation
  return result;
}
```

## Parameters
- `param1`: First parameter description
- `param2`: Second parameter description

## Returns
Returns the processed result as a value or Promise.

## Examples

### Basic Usage
```javascript
const result = {fn_name}('value1', 'value2');
console.log(result);
```

### With Error Handling
```javascript
try {
  const result = {fn_name}('value1', 'value2');
} catch (error) {
  console.error('Error:', error);
}
```

## Notes
- This function is asynchronous
- Throws an error if parameters are invalid
- Performance optimized for large datasets"#;

/// 入门文档模板
pub const GETTING_STARTED_TEMPLATE: &str = r#"# {prompt}

## Introduction
This is comprehensive documentation for {prompt}.

## Getting Started

### Installation
```bash
npm install package-name
```

### Quick Start
```javascript
import { feature } from 'package-name';

const result = feature();
```

## Features
- Feature 1: Description
- Feature 2: Description
- Feature 3: Description

## Configuration
Configure the tool using environment variables or config files.

```javascript
const config = {
  debug: true,
  timeout: 5000,
  retries: 3
};
```

## Examples
See the examples directory for complete implementations.

## Troubleshooting
### Issue 1
Solution and steps to resolve.

### Issue 2
Solution and steps to resolve.

## Contributing
See CONTRIBUTING.md for guidelines.

## License
MIT License"#;

/// 渲染 API 文档
pub fn render_api_doc(prompt: &str) -> String {
    API_DOC_TEMPLATE.replace("{prompt}", prompt)
}

/// 渲染函数文档
///
/// 取提示语的第一个空白分隔词作为示例中的函数名
pub fn render_function_doc(prompt: &str) -> String {
    let fn_name = prompt.split_whitespace().next().unwrap_or(prompt);
    FUNCTION_DOC_TEMPLATE
        .replace("{prompt}", prompt)
        .replace("{fn_name}", fn_name)
}

/// 渲染入门文档
pub fn render_getting_started_doc(prompt: &str) -> String {
    GETTING_STARTED_TEMPLATE.replace("{prompt}", prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_api_doc() {
        let result = render_api_doc("user management");
        assert!(result.starts_with("# API Documentation"));
        assert!(result.contains("endpoints for user management."));
    }

    #[test]
    fn test_render_function_doc() {
        let result = render_function_doc("parseConfig with nested keys");
        assert!(result.starts_with("# Function Documentation"));
        assert!(result.contains("function parseConfig(param1, param2)"));
        assert!(result.contains("const result = parseConfig('value1', 'value2');"));
    }

    #[test]
    fn test_render_getting_started_doc() {
        let result = render_getting_started_doc("my-cli-tool");
        assert!(result.starts_with("# my-cli-tool"));
        assert!(result.contains("documentation for my-cli-tool."));
    }
}
