//! Production JVM capability: dynamic loading and raw JNI invocation.
//!
//! Everything `unsafe` in the workspace lives here. The rest of the launcher
//! only sees the `JvmLoader`/`JvmLibrary`/`Jvm` traits from
//! `conquer-launcher`.

use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::ptr;

use jni::sys;
use libloading::Library;

use conquer_launcher::abi;
use conquer_launcher::abi::EntryPoint;
use conquer_launcher::config::Configuration;
use conquer_launcher::error::{LaunchError, Result};
use conquer_launcher::options::OptionVector;
use conquer_launcher::vm::{EntryOutcome, Jvm, JvmLibrary, JvmLoader};

pub mod locate;

/// Signature of `JNI_CreateJavaVM`.
type CreateVmFn = unsafe extern "system" fn(
    pvm: *mut *mut sys::JavaVM,
    penv: *mut *mut c_void,
    args: *mut c_void,
) -> sys::jint;

/// Loads the JVM library chosen by [`locate::locate_runtime_library`] and
/// resolves its creation symbol.
#[derive(Debug, Default)]
pub struct NativeJvmLoader;

impl JvmLoader for NativeJvmLoader {
    fn load(&self, config: &Configuration) -> Result<Box<dyn JvmLibrary>> {
        let path = locate::locate_runtime_library(config);
        // SAFETY: opening the JVM library runs its initializers; that is the
        // point of this call, and nothing else is loaded from this path.
        let library = unsafe { Library::new(&path) }.map_err(|e| LaunchError::LibraryLoad {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        // SAFETY: the symbol type matches the documented JNI export.
        let create_vm = unsafe {
            library
                .get::<CreateVmFn>(abi::CREATE_VM_SYMBOL.as_bytes())
                .map(|symbol| *symbol)
                .map_err(|e| LaunchError::SymbolResolve {
                    symbol: abi::CREATE_VM_SYMBOL,
                    reason: e.to_string(),
                })?
        };
        Ok(Box::new(NativeJvmLibrary {
            _library: library,
            create_vm,
        }))
    }
}

/// An open JVM library with `JNI_CreateJavaVM` resolved.
pub struct NativeJvmLibrary {
    // Keeps the mapping alive for as long as a created VM may run.
    _library: Library,
    create_vm: CreateVmFn,
}

impl JvmLibrary for NativeJvmLibrary {
    fn create_vm(&self, options: &OptionVector<'_>) -> Result<Box<dyn Jvm>> {
        let option_strings = option_cstrings(options)?;
        let mut vm_options: Vec<sys::JavaVMOption> = option_strings
            .iter()
            .map(|text| sys::JavaVMOption {
                optionString: text.as_ptr() as *mut c_char,
                extraInfo: ptr::null_mut(),
            })
            .collect();
        let mut init_args = sys::JavaVMInitArgs {
            version: abi::RUNTIME_ABI_VERSION,
            nOptions: vm_options.len() as sys::jint,
            options: vm_options.as_mut_ptr(),
            ignoreUnrecognized: if abi::IGNORE_UNRECOGNIZED_OPTIONS {
                sys::JNI_TRUE
            } else {
                sys::JNI_FALSE
            },
        };

        let mut vm: *mut sys::JavaVM = ptr::null_mut();
        let mut env: *mut c_void = ptr::null_mut();
        // SAFETY: init_args and every option string outlive the call; the VM
        // copies what it keeps.
        let status = unsafe {
            (self.create_vm)(
                &mut vm,
                &mut env,
                &mut init_args as *mut sys::JavaVMInitArgs as *mut c_void,
            )
        };
        if status != sys::JNI_OK || vm.is_null() || env.is_null() {
            return Err(LaunchError::RuntimeCreation { status });
        }
        Ok(Box::new(NativeJvm {
            vm,
            env: env as *mut sys::JNIEnv,
        }))
    }
}

/// A running VM plus the env of the thread that created it.
///
/// All calls must come from that thread; the launcher is single-threaded by
/// design, so the type is deliberately neither `Send` nor `Sync`.
pub struct NativeJvm {
    vm: *mut sys::JavaVM,
    env: *mut sys::JNIEnv,
}

impl NativeJvm {
    /// Prints and clears any pending exception through the VM itself.
    fn describe_pending(&self, table: &sys::JNINativeInterface_) -> Result<()> {
        let occurred = env_fn(table.ExceptionOccurred, "ExceptionOccurred")?;
        let describe = env_fn(table.ExceptionDescribe, "ExceptionDescribe")?;
        // SAFETY: env is the valid env of this thread.
        unsafe {
            if !occurred(self.env).is_null() {
                describe(self.env);
            }
        }
        Ok(())
    }
}

impl Jvm for NativeJvm {
    fn invoke_entry(&mut self, entry: &EntryPoint) -> Result<EntryOutcome> {
        let class_name = vm_string(&entry.class)?;
        let method_name = vm_string(&entry.method)?;
        let signature = vm_string(&entry.signature)?;
        let string_class_name = vm_string(abi::STRING_CLASS)?;

        // SAFETY: env belongs to this thread and every pointer passed below
        // outlives its call; null returns are checked before use.
        unsafe {
            let table = &**self.env;

            let find_class = env_fn(table.FindClass, "FindClass")?;
            let entry_class = find_class(self.env, class_name.as_ptr());
            if entry_class.is_null() {
                self.describe_pending(table)?;
                return Err(LaunchError::EntryClassMissing {
                    class: entry.class.clone(),
                });
            }
            let string_class = find_class(self.env, string_class_name.as_ptr());
            if string_class.is_null() {
                self.describe_pending(table)?;
                return Err(LaunchError::EntryClassMissing {
                    class: abi::STRING_CLASS.to_owned(),
                });
            }

            let get_static_method = env_fn(table.GetStaticMethodID, "GetStaticMethodID")?;
            let entry_method =
                get_static_method(self.env, entry_class, method_name.as_ptr(), signature.as_ptr());
            if entry_method.is_null() {
                self.describe_pending(table)?;
                return Err(LaunchError::EntryMethodMissing {
                    class: entry.class.clone(),
                    method: entry.method.clone(),
                    signature: entry.signature.clone(),
                });
            }

            let new_object_array = env_fn(table.NewObjectArray, "NewObjectArray")?;
            let no_args = new_object_array(self.env, 0, string_class, ptr::null_mut());
            if no_args.is_null() {
                self.describe_pending(table)?;
                return Err(LaunchError::EntryArguments {
                    reason: "empty argument array allocation failed".to_owned(),
                });
            }

            // Blocks until the hosted application's main method returns.
            let call_static_void = env_fn(table.CallStaticVoidMethodA, "CallStaticVoidMethodA")?;
            let arguments = [sys::jvalue { l: no_args }];
            call_static_void(self.env, entry_class, entry_method, arguments.as_ptr());

            let exception_occurred = env_fn(table.ExceptionOccurred, "ExceptionOccurred")?;
            if !exception_occurred(self.env).is_null() {
                // Prints the trace and clears the pending exception.
                let describe = env_fn(table.ExceptionDescribe, "ExceptionDescribe")?;
                describe(self.env);
                return Ok(EntryOutcome::UncaughtException);
            }
        }
        Ok(EntryOutcome::Completed)
    }

    fn shut_down(self: Box<Self>) -> Result<()> {
        // SAFETY: the VM pointer stays valid until DestroyJavaVM returns; the
        // call waits for remaining non-daemon threads first.
        let status = unsafe {
            let table = &**self.vm;
            let destroy = env_fn(table.DestroyJavaVM, "DestroyJavaVM")?;
            destroy(self.vm)
        };
        if status != sys::JNI_OK {
            return Err(LaunchError::RuntimeShutdown { status });
        }
        Ok(())
    }
}

fn env_fn<T>(slot: Option<T>, name: &'static str) -> Result<T> {
    slot.ok_or_else(|| LaunchError::SymbolResolve {
        symbol: name,
        reason: "missing from the JNI function table".to_owned(),
    })
}

/// NUL-terminated copy of `text` for the ABI boundary.
fn vm_string(text: &str) -> Result<CString> {
    CString::new(text).map_err(|_| LaunchError::InvalidOption {
        text: text.to_owned(),
    })
}

/// NUL-terminated copies of every option slot, in creation order.
fn option_cstrings(options: &OptionVector<'_>) -> Result<Vec<CString>> {
    options.iter().map(|slot| vm_string(slot.as_str())).collect()
}
