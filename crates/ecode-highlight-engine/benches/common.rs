// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_document(blocks: usize) -> String {
    let base = "说明文字 <示例>\n\n```e\n.版本 2\n\n.程序集 窗口程序集_启动窗口\n.子程序 计算, 整数型, , 返回两数之和\n.参数 甲, 整数型, , 第一个数\n.局部变量 结果, 整数型\n\n结果 ＝ 甲 + 100 ' 加上常数\n.如果真 (结果 ＞ #最大值)\n    信息框 (“结果太大”, 0, )\n.如果真结束\n返回 (结果)\n```\n\n";
    base.repeat(blocks)
}
