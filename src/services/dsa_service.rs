//! DSA 题库服务
//!
//! 固定的内存题目表，按主题键分组。题库不可变，查询是纯只读操作，
//! 难度/分类过滤和 CSV 导出由前端负责。

use crate::models::Difficulty::{self, Easy, Hard, Medium};
use crate::models::DsaQuestion;

/// 构造一条题目记录
const fn q(
    id: &'static str,
    title: &'static str,
    difficulty: Difficulty,
    category: &'static str,
    acceptance_rate: u8,
) -> DsaQuestion {
    DsaQuestion {
        id,
        title,
        difficulty,
        category,
        acceptance_rate,
    }
}

const ARRAYS: &[DsaQuestion] = &[
    q("1", "Two Sum", Easy, "Arrays", 48),
    q("2", "Add Two Numbers", Medium, "Arrays", 32),
    q("3", "Longest Substring Without Repeating Characters", Medium, "Arrays", 33),
    q("4", "Median of Two Sorted Arrays", Hard, "Arrays", 27),
    q("5", "Longest Palindromic Substring", Medium, "Arrays", 32),
    q("6", "Reverse Integer", Easy, "Arrays", 26),
    q("7", "String to Integer", Medium, "Arrays", 14),
    q("8", "Palindrome Number", Easy, "Arrays", 52),
];

const STRINGS: &[DsaQuestion] = &[
    q("9", "Regular Expression Matching", Hard, "Strings", 27),
    q("10", "Container With Most Water", Medium, "Strings", 52),
    q("11", "Integer to Roman", Medium, "Strings", 60),
    q("12", "Roman to Integer", Easy, "Strings", 58),
    q("13", "Longest Common Prefix", Easy, "Strings", 34),
    q("14", "Valid Parentheses", Easy, "Strings", 40),
];

const LINKED_LISTS: &[DsaQuestion] = &[
    q("15", "Merge Two Sorted Lists", Easy, "Linked Lists", 60),
    q("16", "Remove Duplicates from Sorted List", Easy, "Linked Lists", 48),
    q("17", "Reverse Linked List", Easy, "Linked Lists", 60),
    q("18", "Linked List Cycle", Easy, "Linked Lists", 44),
    q("19", "Copy List with Random Pointer", Hard, "Linked Lists", 40),
];

const TREES: &[DsaQuestion] = &[
    q("20", "Binary Tree Inorder Traversal", Easy, "Trees", 64),
    q("21", "Binary Tree Level Order Traversal", Medium, "Trees", 60),
    q("22", "Maximum Depth of Binary Tree", Easy, "Trees", 67),
    q("23", "Lowest Common Ancestor", Medium, "Trees", 57),
    q("24", "Binary Tree Maximum Path Sum", Hard, "Trees", 38),
];

const GRAPHS: &[DsaQuestion] = &[
    q("25", "Number of Islands", Medium, "Graphs", 56),
    q("26", "Clone Graph", Medium, "Graphs", 40),
    q("27", "Course Schedule", Medium, "Graphs", 43),
    q("28", "Word Ladder", Hard, "Graphs", 36),
];

const DP: &[DsaQuestion] = &[
    q("29", "Climbing Stairs", Easy, "Dynamic Programming", 51),
    q("30", "House Robber", Medium, "Dynamic Programming", 41),
    q("31", "Coin Change", Medium, "Dynamic Programming", 39),
    q("32", "Edit Distance", Hard, "Dynamic Programming", 54),
    q("33", "Longest Increasing Subsequence", Medium, "Dynamic Programming", 41),
];

const SORTING: &[DsaQuestion] = &[
    q("34", "Merge Sorted Array", Easy, "Sorting", 41),
    q("35", "Sort List", Medium, "Sorting", 51),
    q("36", "Largest Number", Medium, "Sorting", 30),
    q("37", "Kth Largest Element in an Array", Medium, "Sorting", 57),
];

const SEARCHING: &[DsaQuestion] = &[
    q("38", "Search Insert Position", Easy, "Searching", 41),
    q("39", "Search in Rotated Sorted Array", Medium, "Searching", 33),
    q("40", "Find First and Last Position", Medium, "Searching", 38),
    q("41", "Search a 2D Matrix II", Medium, "Searching", 44),
];

const HASHING: &[DsaQuestion] = &[
    q("42", "Valid Anagram", Easy, "Hashing", 65),
    q("43", "Group Anagrams", Medium, "Hashing", 58),
    q("44", "Ransom Note", Easy, "Hashing", 55),
    q("45", "Isomorphic Strings", Easy, "Hashing", 40),
];

const STACKS_QUEUES: &[DsaQuestion] = &[
    q("46", "Min Stack", Medium, "Stacks & Queues", 49),
    q("47", "Implement Queue using Stacks", Easy, "Stacks & Queues", 60),
    q("48", "Daily Temperatures", Medium, "Stacks & Queues", 66),
    q("49", "Sliding Window Maximum", Hard, "Stacks & Queues", 45),
];

/// 主题表，保持声明顺序（错误提示中的可用主题列表依赖该顺序）
const TOPICS: &[(&str, &[DsaQuestion])] = &[
    ("arrays", ARRAYS),
    ("strings", STRINGS),
    ("linked-lists", LINKED_LISTS),
    ("trees", TREES),
    ("graphs", GRAPHS),
    ("dp", DP),
    ("sorting", SORTING),
    ("searching", SEARCHING),
    ("hashing", HASHING),
    ("stacks-queues", STACKS_QUEUES),
];

/// DSA 题库
pub struct DsaCatalog;

impl DsaCatalog {
    /// 创建题库（内置静态数据）
    pub fn new() -> Self {
        Self
    }

    /// 按主题键查询题目，键大小写不敏感
    pub fn questions_for(&self, topic: &str) -> Option<&'static [DsaQuestion]> {
        let normalized = topic.to_lowercase();
        TOPICS
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, questions)| *questions)
    }

    /// 所有主题键，按声明顺序
    pub fn topic_keys(&self) -> Vec<&'static str> {
        TOPICS.iter().map(|(key, _)| *key).collect()
    }
}

impl Default for DsaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
