//! Tree walker (component B): a single depth-first pass over the parsed
//! script that threads the parent chain and the current injection context
//! top-down (spec.md §4.2), dispatching to the classifier at every tracked
//! node and to the guardrail at every binding site.

use swc_ecma_ast::{
    AssignTarget, AssignTargetPat, Callee, Class, ClassMember, Decl, Expr, ForHead, Function,
    MemberExpr, MemberProp, ObjectPatProp, OptChainBase, Param, ParamOrTsParamProp, Pat, PropName,
    PropOrSpread, SimpleAssignTarget, Stmt, SuperProp, VarDecl, VarDeclOrExpr,
};

use crate::classifier;
use crate::context::{ByteRange, InjectionContext, InjectionKind, ParentFrame, with_parent};
use crate::error::ReservedIdentifierError;
use crate::guardrail;
use crate::parser::ParsedScript;
use crate::store::Store;

type Walk = Result<(), ReservedIdentifierError>;

/// Drives the whole walk from the script's top-level statement list.
pub fn walk_script(parsed: &ParsedScript, store: &mut Store) -> Walk {
    let parents: Vec<ParentFrame> = Vec::new();
    for stmt in &parsed.script.body {
        walk_stmt(parsed, store, stmt, &parents, None)?;
    }
    Ok(())
}

fn walk_stmt(
    parsed: &ParsedScript,
    store: &mut Store,
    stmt: &Stmt,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    if let Some(weight) = classifier::stmt_weight(stmt) {
        let (start, end) = parsed.range_of(stmt);
        classifier::record_tracked(
            store,
            parents,
            inherited,
            ByteRange { start, end },
            classifier::is_injectable_stmt(stmt),
            weight,
        );
    }

    let self_frame = ParentFrame { target: classifier::target_for(parsed, stmt) };
    let child_parents = with_parent(parents, self_frame);
    let parents = child_parents.as_slice();

    match stmt {
        Stmt::Block(b) => {
            for s in &b.stmts {
                walk_stmt(parsed, store, s, parents, inherited)?;
            }
        }
        Stmt::Empty(_) | Stmt::Debugger(_) | Stmt::Break(_) | Stmt::Continue(_) => {}
        Stmt::With(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            let obj_ctx = InjectionContext {
                target: classifier::target_for(parsed, stmt),
                kind: InjectionKind::BeforeNode,
            };
            walk_expr(parsed, store, &n.obj, parents, Some(obj_ctx))?;
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
        }
        Stmt::Return(n) => {
            if let Some(arg) = &n.arg {
                walk_expr(parsed, store, arg, parents, inherited)?;
            }
        }
        Stmt::Labeled(n) => walk_stmt(parsed, store, &n.body, parents, inherited)?,
        Stmt::If(n) => {
            classifier::ensure_block(parsed, store, &n.cons);
            if let Some(alt) = &n.alt {
                classifier::ensure_block(parsed, store, alt);
            }
            let test_ctx = InjectionContext {
                target: classifier::target_for_expr(parsed, n.test.as_ref()),
                kind: InjectionKind::InnerBeginning,
            };
            walk_expr(parsed, store, &n.test, parents, Some(test_ctx))?;
            walk_stmt(parsed, store, &n.cons, parents, inherited)?;
            if let Some(alt) = &n.alt {
                walk_stmt(parsed, store, alt, parents, inherited)?;
            }
        }
        Stmt::Switch(n) => {
            let disc_ctx = InjectionContext {
                target: classifier::target_for(parsed, stmt),
                kind: InjectionKind::BeforeNode,
            };
            walk_expr(parsed, store, &n.discriminant, parents, Some(disc_ctx))?;
            for case in &n.cases {
                // No table entry declares a context for case tests/bodies;
                // they fall back to default climbing, which may bottom out
                // at this SwitchStatement itself (DESIGN.md Open Question 1).
                if let Some(test) = &case.test {
                    walk_expr(parsed, store, test, parents, inherited)?;
                }
                for s in &case.cons {
                    walk_stmt(parsed, store, s, parents, inherited)?;
                }
            }
        }
        Stmt::Throw(n) => walk_expr(parsed, store, &n.arg, parents, inherited)?,
        Stmt::Try(n) => {
            for s in &n.block.stmts {
                walk_stmt(parsed, store, s, parents, inherited)?;
            }
            if let Some(handler) = &n.handler {
                if let Some(param) = &handler.param {
                    walk_pat(parsed, store, param, parents, inherited)?;
                }
                for s in &handler.body.stmts {
                    walk_stmt(parsed, store, s, parents, inherited)?;
                }
            }
            if let Some(fin) = &n.finalizer {
                for s in &fin.stmts {
                    walk_stmt(parsed, store, s, parents, inherited)?;
                }
            }
        }
        Stmt::While(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            let test_ctx = InjectionContext {
                target: classifier::target_for_expr(parsed, n.test.as_ref()),
                kind: InjectionKind::InnerBeginning,
            };
            walk_expr(parsed, store, &n.test, parents, Some(test_ctx))?;
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
        }
        Stmt::DoWhile(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
            let test_ctx = InjectionContext {
                target: classifier::target_for_expr(parsed, n.test.as_ref()),
                kind: InjectionKind::InnerBeginning,
            };
            walk_expr(parsed, store, &n.test, parents, Some(test_ctx))?;
        }
        Stmt::For(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            let here = InjectionContext {
                target: classifier::target_for(parsed, stmt),
                kind: InjectionKind::BeforeNode,
            };
            if let Some(init) = &n.init {
                match init {
                    VarDeclOrExpr::VarDecl(vd) => {
                        walk_var_decl(parsed, store, vd, parents, Some(here))?;
                    }
                    VarDeclOrExpr::Expr(e) => walk_expr(parsed, store, e, parents, Some(here))?,
                }
            }
            if let Some(test) = &n.test {
                let test_ctx = InjectionContext {
                    target: classifier::target_for_expr(parsed, test.as_ref()),
                    kind: InjectionKind::InnerBeginning,
                };
                walk_expr(parsed, store, test, parents, Some(test_ctx))?;
            }
            if let Some(update) = &n.update {
                let update_ctx = InjectionContext {
                    target: classifier::target_for_expr(parsed, update.as_ref()),
                    kind: InjectionKind::InnerBeginning,
                };
                walk_expr(parsed, store, update, parents, Some(update_ctx))?;
            }
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
        }
        Stmt::ForIn(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            let here = InjectionContext {
                target: classifier::target_for(parsed, stmt),
                kind: InjectionKind::BeforeNode,
            };
            walk_for_head(parsed, store, &n.left, parents, Some(here))?;
            walk_expr(parsed, store, &n.right, parents, Some(here))?;
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
        }
        Stmt::ForOf(n) => {
            classifier::ensure_block(parsed, store, &n.body);
            let here = InjectionContext {
                target: classifier::target_for(parsed, stmt),
                kind: InjectionKind::BeforeNode,
            };
            walk_for_head(parsed, store, &n.left, parents, Some(here))?;
            walk_expr(parsed, store, &n.right, parents, Some(here))?;
            walk_stmt(parsed, store, &n.body, parents, inherited)?;
        }
        Stmt::Decl(decl) => walk_decl(parsed, store, decl, parents, inherited)?,
        Stmt::Expr(n) => walk_expr(parsed, store, &n.expr, parents, inherited)?,
    }
    Ok(())
}

fn walk_decl(
    parsed: &ParsedScript,
    store: &mut Store,
    decl: &Decl,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match decl {
        Decl::Var(vd) => walk_var_decl(parsed, store, vd, parents, inherited)?,
        Decl::Fn(f) => {
            guardrail::check_binding(parsed, &f.ident)?;
            walk_function(parsed, store, &f.function, parents, inherited)?;
        }
        Decl::Class(c) => walk_class(parsed, store, &c.class, parents, inherited)?,
        // `using`/TS-only declarations: unreachable when parsing with
        // `Syntax::Es`.
        _ => {}
    }
    Ok(())
}

fn walk_var_decl(
    parsed: &ParsedScript,
    store: &mut Store,
    vd: &VarDecl,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    for decl in &vd.decls {
        if let Pat::Ident(binding) = &decl.name {
            guardrail::check_binding(parsed, &binding.id)?;
        }
        walk_pat(parsed, store, &decl.name, parents, inherited)?;
        if let Some(init) = &decl.init {
            walk_expr(parsed, store, init, parents, inherited)?;
        }
    }
    Ok(())
}

fn walk_for_head(
    parsed: &ParsedScript,
    store: &mut Store,
    left: &ForHead,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match left {
        ForHead::VarDecl(vd) => walk_var_decl(parsed, store, vd, parents, inherited)?,
        ForHead::Pat(p) => walk_pat(parsed, store, p, parents, inherited)?,
        ForHead::UsingDecl(_) => {}
    }
    Ok(())
}

fn walk_pat(
    parsed: &ParsedScript,
    store: &mut Store,
    pat: &Pat,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match pat {
        Pat::Ident(_) | Pat::Invalid(_) => {}
        Pat::Array(arr) => {
            for elem in arr.elems.iter().flatten() {
                walk_pat(parsed, store, elem, parents, inherited)?;
            }
        }
        Pat::Rest(rest) => walk_pat(parsed, store, &rest.arg, parents, inherited)?,
        Pat::Object(obj) => {
            for prop in &obj.props {
                walk_object_pat_prop(parsed, store, prop, parents, inherited)?;
            }
        }
        Pat::Assign(a) => {
            walk_pat(parsed, store, &a.left, parents, inherited)?;
            walk_expr(parsed, store, &a.right, parents, inherited)?;
        }
        Pat::Expr(e) => walk_expr(parsed, store, e, parents, inherited)?,
    }
    Ok(())
}

fn walk_object_pat_prop(
    parsed: &ParsedScript,
    store: &mut Store,
    prop: &ObjectPatProp,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match prop {
        ObjectPatProp::KeyValue(kv) => {
            if let PropName::Computed(c) = &kv.key {
                walk_expr(parsed, store, &c.expr, parents, inherited)?;
            }
            walk_pat(parsed, store, &kv.value, parents, inherited)?;
        }
        ObjectPatProp::Assign(a) => {
            if let Some(default) = &a.value {
                walk_expr(parsed, store, default, parents, inherited)?;
            }
        }
        ObjectPatProp::Rest(r) => walk_pat(parsed, store, &r.arg, parents, inherited)?,
    }
    Ok(())
}

fn walk_function(
    parsed: &ParsedScript,
    store: &mut Store,
    function: &Function,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    for param in &function.params {
        walk_param(parsed, store, param, parents, inherited)?;
    }
    if let Some(body) = &function.body {
        // A function body's statements receive whichever context the
        // enclosing expression/statement propagated, unchanged: no table
        // entry resets context at a function boundary (DESIGN.md).
        for s in &body.stmts {
            walk_stmt(parsed, store, s, parents, inherited)?;
        }
    }
    Ok(())
}

fn walk_param(
    parsed: &ParsedScript,
    store: &mut Store,
    param: &Param,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    walk_pat(parsed, store, &param.pat, parents, inherited)
}

fn walk_class(
    parsed: &ParsedScript,
    store: &mut Store,
    class: &Class,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    if let Some(super_class) = &class.super_class {
        walk_expr(parsed, store, super_class, parents, inherited)?;
    }
    for member in &class.body {
        match member {
            ClassMember::Method(m) => walk_function(parsed, store, &m.function, parents, inherited)?,
            ClassMember::PrivateMethod(m) => {
                walk_function(parsed, store, &m.function, parents, inherited)?;
            }
            ClassMember::ClassProp(p) => {
                if let Some(value) = &p.value {
                    walk_expr(parsed, store, value, parents, inherited)?;
                }
            }
            ClassMember::PrivateProp(p) => {
                if let Some(value) = &p.value {
                    walk_expr(parsed, store, value, parents, inherited)?;
                }
            }
            ClassMember::Constructor(c) => {
                for param in &c.params {
                    if let ParamOrTsParamProp::Param(p) = param {
                        walk_pat(parsed, store, &p.pat, parents, inherited)?;
                    }
                }
                if let Some(body) = &c.body {
                    for s in &body.stmts {
                        walk_stmt(parsed, store, s, parents, inherited)?;
                    }
                }
            }
            ClassMember::StaticBlock(b) => {
                for s in &b.body.stmts {
                    walk_stmt(parsed, store, s, parents, inherited)?;
                }
            }
            ClassMember::Empty(_) | ClassMember::AutoAccessor(_) | ClassMember::TsIndexSignature(_) => {}
        }
    }
    Ok(())
}

fn walk_member_children(
    parsed: &ParsedScript,
    store: &mut Store,
    m: &MemberExpr,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    walk_expr(parsed, store, &m.obj, parents, inherited)?;
    if let MemberProp::Computed(c) = &m.prop {
        walk_expr(parsed, store, &c.expr, parents, inherited)?;
    }
    Ok(())
}

fn walk_assign_target(
    parsed: &ParsedScript,
    store: &mut Store,
    target: &AssignTarget,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match target {
        AssignTarget::Simple(SimpleAssignTarget::Member(m)) => {
            let (start, end) = parsed.range_of(m);
            classifier::record_tracked(store, parents, inherited, ByteRange { start, end }, false, 1);
            walk_member_children(parsed, store, m, parents, inherited)?;
        }
        AssignTarget::Simple(SimpleAssignTarget::Ident(_)) | AssignTarget::Simple(_) => {}
        AssignTarget::Pat(AssignTargetPat::Array(a)) => {
            for elem in a.elems.iter().flatten() {
                walk_pat(parsed, store, elem, parents, inherited)?;
            }
        }
        AssignTarget::Pat(AssignTargetPat::Object(o)) => {
            for prop in &o.props {
                walk_object_pat_prop(parsed, store, prop, parents, inherited)?;
            }
        }
        AssignTarget::Pat(_) => {}
    }
    Ok(())
}

fn walk_prop_or_spread(
    parsed: &ParsedScript,
    store: &mut Store,
    prop: &PropOrSpread,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    match prop {
        PropOrSpread::Spread(s) => walk_expr(parsed, store, &s.expr, parents, inherited)?,
        PropOrSpread::Prop(p) => match p.as_ref() {
            swc_ecma_ast::Prop::Shorthand(_) => {}
            swc_ecma_ast::Prop::KeyValue(kv) => {
                if let PropName::Computed(c) = &kv.key {
                    walk_expr(parsed, store, &c.expr, parents, inherited)?;
                }
                walk_expr(parsed, store, &kv.value, parents, inherited)?;
            }
            swc_ecma_ast::Prop::Assign(a) => walk_expr(parsed, store, &a.value, parents, inherited)?,
            swc_ecma_ast::Prop::Getter(g) => {
                if let Some(body) = &g.body {
                    for s in &body.stmts {
                        walk_stmt(parsed, store, s, parents, inherited)?;
                    }
                }
            }
            swc_ecma_ast::Prop::Setter(s) => {
                walk_pat(parsed, store, &s.param, parents, inherited)?;
                if let Some(body) = &s.body {
                    for st in &body.stmts {
                        walk_stmt(parsed, store, st, parents, inherited)?;
                    }
                }
            }
            swc_ecma_ast::Prop::Method(m) => walk_function(parsed, store, &m.function, parents, inherited)?,
        },
    }
    Ok(())
}

fn walk_expr(
    parsed: &ParsedScript,
    store: &mut Store,
    expr: &Expr,
    parents: &[ParentFrame],
    inherited: Option<InjectionContext>,
) -> Walk {
    if let Some(weight) = classifier::expr_weight(expr) {
        let (start, end) = parsed.range_of(expr);
        classifier::record_tracked(store, parents, inherited, ByteRange { start, end }, false, weight);
    }

    match expr {
        Expr::Array(a) => {
            for el in a.elems.iter().flatten() {
                walk_expr(parsed, store, &el.expr, parents, inherited)?;
            }
        }
        Expr::Object(o) => {
            for prop in &o.props {
                walk_prop_or_spread(parsed, store, prop, parents, inherited)?;
            }
        }
        Expr::Fn(f) => {
            if let Some(ident) = &f.ident {
                guardrail::check_binding(parsed, ident)?;
            }
            walk_function(parsed, store, &f.function, parents, inherited)?;
        }
        Expr::Unary(u) => walk_expr(parsed, store, &u.arg, parents, inherited)?,
        Expr::Update(u) => walk_expr(parsed, store, &u.arg, parents, inherited)?,
        Expr::Bin(b) => {
            walk_expr(parsed, store, &b.left, parents, inherited)?;
            walk_expr(parsed, store, &b.right, parents, inherited)?;
        }
        Expr::Assign(a) => {
            walk_assign_target(parsed, store, &a.left, parents, inherited)?;
            walk_expr(parsed, store, &a.right, parents, inherited)?;
        }
        Expr::Member(m) => walk_member_children(parsed, store, m, parents, inherited)?,
        Expr::SuperProp(sp) => {
            if let SuperProp::Computed(c) = &sp.prop {
                walk_expr(parsed, store, &c.expr, parents, inherited)?;
            }
        }
        Expr::Cond(c) => {
            walk_expr(parsed, store, &c.test, parents, inherited)?;
            walk_expr(parsed, store, &c.cons, parents, inherited)?;
            walk_expr(parsed, store, &c.alt, parents, inherited)?;
        }
        Expr::Call(c) => {
            if let Callee::Expr(callee) = &c.callee {
                walk_expr(parsed, store, callee, parents, inherited)?;
            }
            for arg in &c.args {
                walk_expr(parsed, store, &arg.expr, parents, inherited)?;
            }
        }
        Expr::New(n) => {
            walk_expr(parsed, store, &n.callee, parents, inherited)?;
            for arg in n.args.iter().flatten() {
                walk_expr(parsed, store, &arg.expr, parents, inherited)?;
            }
        }
        Expr::Seq(s) => {
            for e in &s.exprs {
                walk_expr(parsed, store, e, parents, inherited)?;
            }
        }
        Expr::Tpl(t) => {
            for e in &t.exprs {
                walk_expr(parsed, store, e, parents, inherited)?;
            }
        }
        Expr::TaggedTpl(t) => {
            walk_expr(parsed, store, &t.tag, parents, inherited)?;
            for e in &t.tpl.exprs {
                walk_expr(parsed, store, e, parents, inherited)?;
            }
        }
        Expr::Arrow(a) => {
            for p in &a.params {
                walk_pat(parsed, store, p, parents, inherited)?;
            }
            match a.body.as_ref() {
                swc_ecma_ast::BlockStmtOrExpr::BlockStmt(b) => {
                    for s in &b.stmts {
                        walk_stmt(parsed, store, s, parents, inherited)?;
                    }
                }
                swc_ecma_ast::BlockStmtOrExpr::Expr(e) => walk_expr(parsed, store, e, parents, inherited)?,
            }
        }
        Expr::Class(c) => {
            // A class expression's name (if any) binds only inside the
            // class body itself, not in the enclosing scope — it is not
            // one of the three binding sites the guardrail covers.
            walk_class(parsed, store, &c.class, parents, inherited)?;
        }
        Expr::Yield(y) => {
            if let Some(arg) = &y.arg {
                walk_expr(parsed, store, arg, parents, inherited)?;
            }
        }
        Expr::Await(a) => walk_expr(parsed, store, &a.arg, parents, inherited)?,
        Expr::Paren(p) => walk_expr(parsed, store, &p.expr, parents, inherited)?,
        Expr::OptChain(o) => match o.base.as_ref() {
            OptChainBase::Member(m) => {
                let (start, end) = parsed.range_of(m);
                classifier::record_tracked(store, parents, inherited, ByteRange { start, end }, false, 1);
                walk_member_children(parsed, store, m, parents, inherited)?;
            }
            OptChainBase::Call(c) => {
                let (start, end) = parsed.range_of(c);
                classifier::record_tracked(store, parents, inherited, ByteRange { start, end }, false, 1);
                walk_expr(parsed, store, &c.callee, parents, inherited)?;
                for arg in &c.args {
                    walk_expr(parsed, store, &arg.expr, parents, inherited)?;
                }
            }
        },
        Expr::This(_) | Expr::Ident(_) | Expr::Lit(_) | Expr::PrivateName(_) | Expr::Invalid(_) => {}
        // JSX and TypeScript-only node kinds: unreachable when parsing
        // with `Syntax::Es`.
        _ => {}
    }
    Ok(())
}
